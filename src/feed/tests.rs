#[cfg(test)]
mod tests {
    use super::super::loader::{load_units_from_str, proxy_response};
    use super::super::models::*;
    use super::super::normalizer::normalize_value;
    use crate::error::LoadError;
    use serde_json::{json, Value};

    // Records with every field shape the sheet has been seen to produce, and a few it hasn't
    fn odd_records() -> Vec<Value> {
        vec![
            json!({}),
            json!({"unit": null, "building": [1], "rent": {}, "images": 7, "description": null}),
            json!({"unit": 7, "building": 3, "rent": 4100, "isleased": "no", "sqft": "n/a"}),
            json!({"unit": "Unit 9", "bedBath": "Studio / 1 Bath", "rent": "$3,050.00", "images": ""}),
            json!({"unit": "2C", "bedbath": "3 Bed / 2 Bath", "rent": "HPD", "type": "HPD"}),
            json!({"unit": "PH", "rent": "", "description": ["Penthouse.", 5], "images": ["a.png"]}),
            json!({"unit": "G1", "outdoor": "Patio, veiw", "isLeased": true, "sqft": 712.5}),
        ]
    }

    #[test]
    fn test_normalization_is_total_and_well_typed() {
        for record in odd_records() {
            let unit = normalize_value(&record).expect("objects always normalize");
            let value = serde_json::to_value(&unit).unwrap();

            assert!(!unit.id.is_empty());
            assert!(value["building"].is_string(), "building must be a string: {}", record);
            assert!(value["isLeased"].is_boolean());
            assert!(value["images"].is_array());
            assert!(value["description"].is_array());
        }
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for record in odd_records() {
            let once = normalize_value(&record).unwrap();
            let twice = normalize_value(&serde_json::to_value(&once).unwrap()).unwrap();
            assert_eq!(once, twice, "re-normalizing changed {}", record);
        }
    }

    #[test]
    fn test_formatted_rent_follows_rent() {
        for record in odd_records() {
            let unit = normalize_value(&record).unwrap();
            let expected = if unit.is_hpd() {
                HPD.to_string()
            } else {
                unit.rent.amount().map(format_currency).unwrap_or_default()
            };
            assert_eq!(unit.formatted_rent, expected);
        }
    }

    #[test]
    fn test_scenario_record_4b() {
        let units =
            load_units_from_str(r#"[{"unit":"4B","bedbath":"2 Bed/1 Bath","rent":"4200"}]"#).unwrap();
        let unit = &units[0];

        assert_eq!(unit.id, "Unit 4B");
        assert_eq!(unit.bed_bath, "2 Bed/1 Bath");
        assert_eq!(unit.formatted_rent, "$4,200.00");
        assert!(unit.images.is_empty());
        assert!(unit.description.is_empty());
        assert!(!unit.is_leased);
    }

    #[test]
    fn test_loader_skips_non_objects() {
        let units = load_units_from_str(r#"[{"unit":"1"}, "junk", 3, {"unit":"2"}]"#).unwrap();
        let ids: Vec<_> = units.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["Unit 1", "Unit 2"]);
    }

    #[test]
    fn test_loader_rejects_malformed_bodies() {
        assert!(matches!(
            load_units_from_str("{not json"),
            Err(LoadError::Parse(_))
        ));
        assert_eq!(
            load_units_from_str(r#"{"error":"quota"}"#),
            Err(LoadError::NotAnArray)
        );
    }

    #[test]
    fn test_proxy_response_shapes() {
        let ok = proxy_response(&load_units_from_str(r#"[{"unit":"3A","building":4}]"#));
        assert_eq!(ok[0]["id"], "Unit 3A");
        assert_eq!(ok[0]["building"], "4");
        assert_eq!(ok[0]["isLeased"], false);

        let err = proxy_response(&Err(LoadError::Status(503)));
        assert_eq!(
            err["error"],
            "Failed to load unit data: HTTP error! status: 503"
        );
    }

    mod generated {
        use crate::feed::models::{format_currency, HPD};
        use crate::feed::normalizer::normalize_value;
        use proptest::prelude::*;
        use serde_json::{Map, Value};

        const FIELD_KEYS: &[&str] = &[
            "unit", "bedBath", "bedbath", "rent", "type", "images", "description",
            "isleased", "isLeased", "sqft", "outdoor", "view", "building",
        ];

        // Strings the sheet is known to produce
        const SAMPLES: &[&str] = &[
            "", " ", "HPD", " hpd ", "Unit 4B", "Unit", "4B", "2 Bed / 1.5 Bath",
            "$4,200.00", "1.2.3", ".", "call", "yes", "leased", "Terrace, city veiw",
            "Veiw. Veiw", "a.png, ,b.png", "One. Two.. Three", "1e5",
        ];

        // Known strings mixed with arbitrary printable text
        fn text() -> impl Strategy<Value = String> {
            prop_oneof![
                prop::sample::select(SAMPLES).prop_map(str::to_string),
                "[ -~]{0,24}",
            ]
        }

        fn scalar() -> impl Strategy<Value = Value> {
            prop_oneof![
                Just(Value::Null),
                any::<bool>().prop_map(Value::from),
                any::<i64>().prop_map(Value::from),
                (-1.0e15f64..1.0e15).prop_map(Value::from),
                prop_oneof![Just(1.0e300), Just(5.0e-324), Just(-0.0)].prop_map(Value::from),
                text().prop_map(Value::from),
            ]
        }

        fn value() -> impl Strategy<Value = Value> {
            scalar().prop_recursive(2, 16, 4, |inner| {
                prop_oneof![
                    prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                    prop::collection::btree_map("[a-z]{1,6}", inner, 0..3)
                        .prop_map(|fields| Value::Object(fields.into_iter().collect())),
                ]
            })
        }

        fn record() -> impl Strategy<Value = Value> {
            prop::collection::btree_map(prop::sample::select(FIELD_KEYS), value(), 0..FIELD_KEYS.len())
                .prop_map(|fields| {
                    let map: Map<String, Value> = fields
                        .into_iter()
                        .map(|(key, value)| (key.to_string(), value))
                        .collect();
                    Value::Object(map)
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(512))]

            #[test]
            fn any_record_normalizes_to_well_typed_unit(raw in record()) {
                let unit = normalize_value(&raw);
                prop_assert!(unit.is_some());
                let unit = unit.unwrap();
                let value = serde_json::to_value(&unit).unwrap();

                prop_assert!(unit.id.starts_with("Unit "));
                prop_assert!(value["id"].is_string());
                prop_assert!(value["building"].is_string());
                prop_assert!(value["bedBath"].is_string());
                prop_assert!(value["isLeased"].is_boolean());
                prop_assert!(value["images"].as_array().is_some_and(|a| a.iter().all(Value::is_string)));
                prop_assert!(value["description"].as_array().is_some_and(|a| a.iter().all(Value::is_string)));
                prop_assert!(value["formattedRent"].is_string());
            }

            #[test]
            fn normalizing_twice_changes_nothing(raw in record()) {
                let once = normalize_value(&raw).unwrap();
                let twice = normalize_value(&serde_json::to_value(&once).unwrap()).unwrap();
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn formatted_rent_tracks_rent(raw in record()) {
                let unit = normalize_value(&raw).unwrap();
                let expected = if unit.is_hpd() {
                    HPD.to_string()
                } else {
                    unit.rent.amount().map(format_currency).unwrap_or_default()
                };
                prop_assert_eq!(unit.formatted_rent, expected);
            }

            #[test]
            fn non_objects_are_never_records(raw in scalar()) {
                prop_assert!(normalize_value(&raw).is_none());
            }
        }
    }
}
