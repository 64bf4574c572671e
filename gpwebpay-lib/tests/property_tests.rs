//! Property-based tests for the request model.
//!
//! These tests use proptest to verify the wire-contract invariants across a
//! wide range of inputs: canonical field order, the signable subset rule,
//! deterministic signing-string assembly and exact amount conversion.

#[cfg(test)]
mod amount_properties {
    use gpwebpay_lib::amount::{from_minor_units, to_minor_units, MAX_AMOUNT_MINOR};
    use gpwebpay_lib::Currency;
    use proptest::prelude::*;

    proptest! {
        /// Minor-unit conversion round-trips exactly for every currency.
        #[test]
        fn minor_units_round_trip(
            minor in 0u64..=999_999_999_999u64,
            currency in prop::sample::select(Currency::ALL)
        ) {
            let decimal = from_minor_units(minor, currency);
            prop_assert_eq!(to_minor_units(decimal, currency).unwrap(), minor);
        }

        /// Every in-range two-decimal amount converts.
        #[test]
        fn two_decimal_amounts_always_convert(minor in 0u64..=MAX_AMOUNT_MINOR) {
            let decimal = from_minor_units(minor, Currency::Czk);
            prop_assert!(to_minor_units(decimal, Currency::Czk).is_ok());
        }

        /// Negative amounts never convert.
        #[test]
        fn negative_amounts_never_convert(minor in 1u64..=MAX_AMOUNT_MINOR) {
            let decimal = -from_minor_units(minor, Currency::Eur);
            prop_assert!(to_minor_units(decimal, Currency::Eur).is_err());
        }
    }
}

#[cfg(test)]
mod ordering_properties {
    use gpwebpay_lib::prelude::*;
    use proptest::prelude::*;

    #[allow(clippy::too_many_arguments)]
    fn build_request(
        order_number: u64,
        minor: u64,
        currency: Currency,
        flag: u8,
        mer: Option<String>,
        desc: Option<String>,
        md: Option<String>,
        user: Option<String>,
        add_info: bool,
        lang: Option<String>,
    ) -> PaymentRequest {
        let mut builder = PaymentRequestBuilder::new(
            order_number,
            from_minor_units(minor, currency),
            currency,
            DepositFlag::from_flag(flag).unwrap(),
            "https://merchant/return",
        );
        if let Some(value) = mer {
            builder = builder.with_mer_order_number(value);
        }
        if let Some(value) = desc {
            builder = builder.with_description(value);
        }
        if let Some(value) = md {
            builder = builder.with_merchant_data(value);
        }
        if let Some(value) = user {
            builder = builder.with_user_param1(value);
        }
        if add_info {
            builder = builder.with_add_info(AddInfoBlock::default().with_item("note", "n"));
        }
        if let Some(value) = lang {
            builder = builder.with_lang(value);
        }
        builder.build().unwrap()
    }

    proptest! {
        /// Field order is canonical no matter which optionals are present.
        #[test]
        fn field_order_is_canonical(
            order_number in any::<u64>(),
            minor in 0u64..=999_999_999_999u64,
            currency in prop::sample::select(Currency::ALL),
            flag in 0u8..2,
            mer in proptest::option::of("[A-Za-z0-9-]{1,12}"),
            desc in proptest::option::of("[A-Za-z0-9 #]{1,16}"),
            md in proptest::option::of("[A-Za-z0-9=]{1,12}"),
            user in proptest::option::of("[A-Za-z0-9]{1,8}"),
            add_info in any::<bool>(),
            lang in proptest::option::of("[A-Z]{2}")
        ) {
            let request = build_request(
                order_number,
                minor,
                currency,
                flag,
                mer.clone(),
                desc.clone(),
                md.clone(),
                user.clone(),
                add_info,
                lang.clone(),
            );

            let mut expected = vec![
                "MERCHANTNUMBER",
                "OPERATION",
                "ORDERNUMBER",
                "AMOUNT",
                "CURRENCY",
                "DEPOSITFLAG",
            ];
            if mer.is_some() {
                expected.push("MERORDERNUM");
            }
            expected.push("URL");
            if desc.is_some() {
                expected.push("DESCRIPTION");
            }
            if md.is_some() {
                expected.push("MD");
            }
            if user.is_some() {
                expected.push("USERPARAM1");
            }
            expected.push("PAYMETHOD");
            if add_info {
                expected.push("ADDINFO");
            }
            if lang.is_some() {
                expected.push("LANG");
            }

            let actual: Vec<&str> =
                request.all_parameters().iter().map(|(name, _)| name).collect();
            prop_assert_eq!(actual, expected);
        }

        /// The signable view is the ordered subset of all parameters minus
        /// LANG and DIGEST, nothing more.
        #[test]
        fn signable_is_an_ordered_subset(
            minor in 0u64..=999_999_999_999u64,
            currency in prop::sample::select(Currency::ALL),
            lang in proptest::option::of("[A-Z]{2}"),
            digest in proptest::option::of("[a-f0-9]{8}")
        ) {
            let mut request = build_request(
                1, minor, currency, 0, None, None, None, None, false, lang,
            );
            if let Some(digest) = digest {
                request.set_digest(digest).unwrap();
            }

            let signable: Vec<&str> = request
                .signable_parameters()
                .into_iter()
                .map(|(name, _)| name)
                .collect();
            let filtered: Vec<&str> = request
                .all_parameters()
                .iter()
                .map(|(name, _)| name)
                .filter(|&name| name != "LANG" && name != "DIGEST")
                .collect();
            prop_assert_eq!(signable, filtered);
        }

        /// Identical inputs always assemble the identical signing string.
        #[test]
        fn signing_string_is_deterministic(
            order_number in any::<u64>(),
            minor in 0u64..=999_999_999_999u64,
            currency in prop::sample::select(Currency::ALL),
            flag in 0u8..2,
            desc in proptest::option::of("[A-Za-z0-9 ]{1,16}"),
            merchant in "[0-9]{1,10}"
        ) {
            let mut first = build_request(
                order_number, minor, currency, flag,
                None, desc.clone(), None, None, false, None,
            );
            let mut second = build_request(
                order_number, minor, currency, flag,
                None, desc, None, None, false, None,
            );
            first.set_merchant_number(merchant.clone()).unwrap();
            second.set_merchant_number(merchant).unwrap();

            prop_assert_eq!(
                signing_string(&first).unwrap(),
                signing_string(&second).unwrap()
            );
        }

        /// Custom params append at the end, then overwrite in place.
        #[test]
        fn set_param_appends_then_overwrites_in_place(
            name_suffix in "[A-Z]{2,10}",
            first in "[a-z]{1,8}",
            second in "[a-z]{1,8}"
        ) {
            let mut request = build_request(
                1, 100, Currency::Czk, 0, None, None, None, None, false, None,
            );
            // No modeled field name starts with X.
            let name = format!("X{}", name_suffix);

            request.set_param(name.clone(), first).unwrap();
            let len = request.all_parameters().len();
            let position = request.all_parameters().position(&name).unwrap();
            prop_assert_eq!(position, len - 1);

            request.set_param(name.clone(), second.clone()).unwrap();
            prop_assert_eq!(request.all_parameters().len(), len);
            prop_assert_eq!(request.all_parameters().position(&name), Some(position));
            prop_assert_eq!(
                request.get(&name).unwrap().as_text(),
                Some(second.as_str())
            );
        }
    }
}
