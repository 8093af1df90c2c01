use serde_json::json;
use teddylove_storefront::personalization::{
    CanonicalPersonalization, FlowerChoice, LegacyPersonalization, Personalization, TeddyChoice,
    calculate_extra_cost, convert_to_legacy_format, convert_to_new_format,
    get_personalization_summary, has_personalization,
};

fn canonical() -> CanonicalPersonalization {
    CanonicalPersonalization::default()
}

#[test]
fn empty_record_costs_nothing() {
    assert_eq!(calculate_extra_cost(&canonical()), 0.0);
    assert!(!has_personalization(&canonical()));
    assert_eq!(get_personalization_summary(&canonical()), "No personalization");
}

#[test]
fn occasion_surcharges() {
    for (occasion, cost) in [
        ("Graduation", 5.0),
        ("Birthday", 3.0),
        ("Valentine", 8.0),
        ("Mini", 2.0),
        ("Anniversary", 0.0),
    ] {
        let details = CanonicalPersonalization {
            occasion: Some(occasion.into()),
            ..canonical()
        };
        assert_eq!(calculate_extra_cost(&details), cost, "{occasion}");
    }
}

#[test]
fn teddy_only_costs_when_included() {
    let teddy = |included, kind: &str| CanonicalPersonalization {
        teddy: Some(TeddyChoice {
            included: Some(included),
            kind: Some(kind.into()),
            color: Some("Brown".into()),
        }),
        ..canonical()
    };
    assert_eq!(calculate_extra_cost(&teddy(true, "normal")), 15.0);
    assert_eq!(calculate_extra_cost(&teddy(true, "handmade")), 20.0);
    assert_eq!(calculate_extra_cost(&teddy(true, "fluffy")), 25.0);
    assert_eq!(calculate_extra_cost(&teddy(false, "fluffy")), 0.0);
    assert!(!has_personalization(&teddy(false, "fluffy")));
}

#[test]
fn flowers_wrapping_toys_and_design() {
    let details = CanonicalPersonalization {
        flowers: Some(FlowerChoice {
            count: Some(12),
            color: Some("Red".into()),
        }),
        wrapping_paper: Some("Premium".into()),
        soft_toys: Some("Yes".into()),
        felt_design: Some("Hearts".into()),
        ..canonical()
    };
    assert_eq!(calculate_extra_cost(&details), 12.0 + 3.0 + 8.0 + 5.0);

    let blank_design = CanonicalPersonalization {
        felt_design: Some("   ".into()),
        soft_toys: Some("No".into()),
        wrapping_paper: Some("Gift Box".into()),
        ..canonical()
    };
    assert_eq!(calculate_extra_cost(&blank_design), 5.0);
}

#[test]
fn valentine_fluffy_teddy_in_gift_box_costs_38() {
    let legacy = LegacyPersonalization {
        occasion: Some("Valentine".into()),
        teddy: Some("With".into()),
        teddy_type: Some("fluffy".into()),
        wrapping_paper: Some("Gift Box".into()),
        ..Default::default()
    };
    let details = convert_to_new_format(&legacy);
    assert_eq!(calculate_extra_cost(&details), 38.0);
    assert_eq!(details.extra_cost, Some(38.0));
}

#[test]
fn custom_message_alone_counts_as_personalized() {
    let details = CanonicalPersonalization {
        custom_message: Some("hi".into()),
        ..canonical()
    };
    assert!(has_personalization(&details));
    assert_eq!(calculate_extra_cost(&details), 0.0);
    assert_eq!(get_personalization_summary(&details), "Message: hi");
}

#[test]
fn zero_flowers_do_not_count() {
    let details = CanonicalPersonalization {
        flowers: Some(FlowerChoice {
            count: Some(0),
            color: Some("Red".into()),
        }),
        ..canonical()
    };
    assert!(!has_personalization(&details));
}

#[test]
fn summary_lists_parts_in_order() {
    let details = CanonicalPersonalization {
        occasion: Some("Birthday".into()),
        teddy: Some(TeddyChoice {
            included: Some(true),
            kind: Some("fluffy".into()),
            color: Some("White".into()),
        }),
        flowers: Some(FlowerChoice {
            count: Some(6),
            color: Some("Pink".into()),
        }),
        wrapping_paper: Some("Premium".into()),
        soft_toys: Some("Yes".into()),
        felt_design: Some("Stars".into()),
        custom_message: Some("Love you".into()),
        ..canonical()
    };
    assert_eq!(
        get_personalization_summary(&details),
        "Occasion: Birthday, Teddy: fluffy (White), Flowers: 6 (Pink), Wrapping: Premium, \
         Soft Toys: Yes, Custom Design: Stars, Message: Love you"
    );
}

#[test]
fn legacy_migration_reads_alternate_keys() {
    let legacy: LegacyPersonalization = serde_json::from_value(json!({
        "occasion": "Graduation",
        "wrappingPaper": "Premium",
        "feltDesign": "Cap",
        "massage": "Congrats",
        "teddy": "With",
        "teddyType": "handmade",
        "teddyColor": "Brown",
        "flowersCount": "5 roses",
        "flowersColor": "Yellow",
        "softToys": "Yes"
    }))
    .unwrap();

    let details = convert_to_new_format(&legacy);
    assert!(details.customization_id.as_deref().unwrap().starts_with("CUST-"));
    assert_eq!(details.wrapping_paper.as_deref(), Some("Premium"));
    assert_eq!(details.felt_design.as_deref(), Some("Cap"));
    assert_eq!(details.custom_message.as_deref(), Some("Congrats"));
    assert_eq!(details.soft_toys.as_deref(), Some("Yes"));
    assert_eq!(
        details.teddy,
        Some(TeddyChoice {
            included: Some(true),
            kind: Some("handmade".into()),
            color: Some("Brown".into()),
        })
    );
    assert_eq!(details.flowers.as_ref().and_then(|f| f.count), Some(5));
    // 5 + 15 + 5 + 5 + 3 + 8 + 5
    assert_eq!(details.extra_cost, Some(46.0));
}

#[test]
fn numeric_flower_count_is_accepted() {
    let legacy: LegacyPersonalization =
        serde_json::from_value(json!({ "flowersCount": 3 })).unwrap();
    let details = convert_to_new_format(&legacy);
    assert_eq!(details.flowers.and_then(|f| f.count), Some(3));
}

#[test]
fn legacy_round_trip_keeps_selections() {
    let original = CanonicalPersonalization {
        customization_id: Some("CUST-1".into()),
        occasion: Some("Mini".into()),
        teddy: Some(TeddyChoice {
            included: Some(false),
            kind: Some("normal".into()),
            color: Some("Cream".into()),
        }),
        flowers: Some(FlowerChoice {
            count: Some(3),
            color: None,
        }),
        wrapping_paper: Some("Gift Box".into()),
        soft_toys: Some("No".into()),
        felt_design: None,
        custom_message: Some("Hello".into()),
        extra_cost: Some(10.0),
    };

    let legacy = convert_to_legacy_format(&original);
    assert_eq!(legacy.teddy.as_deref(), Some("Without"));
    assert_eq!(legacy.flowers_count.as_deref(), Some("3"));

    let restored = convert_to_new_format(&legacy);
    assert_eq!(restored.fingerprint(), original.fingerprint());
}

#[test]
fn classifies_raw_records() {
    let legacy = Personalization::from_value(json!({
        "occasion": "Birthday",
        "teddy": "With",
        "teddyType": "fluffy"
    }))
    .unwrap();
    assert!(matches!(legacy, Personalization::Legacy(_)));
    assert_eq!(calculate_extra_cost(&legacy.into_canonical()), 28.0);

    let canonical = Personalization::from_value(json!({
        "customization_id": "CUST-9",
        "teddy": { "included": true, "type": "handmade" },
        "wrappingPaper": "Premium"
    }))
    .unwrap();
    let Personalization::Canonical(details) = canonical else {
        panic!("expected a canonical record");
    };
    assert_eq!(details.customization_id(), Some("CUST-9"));
    assert_eq!(details.wrapping_paper.as_deref(), Some("Premium"));
    assert_eq!(calculate_extra_cost(&details), 23.0);

    assert!(Personalization::from_value(json!({})).is_none());
    assert!(Personalization::from_value(json!("Birthday")).is_none());
}

#[test]
fn normalize_drops_empty_records_and_prices_the_rest() {
    assert!(Personalization::from(LegacyPersonalization::default()).normalize().is_none());

    let details = Personalization::from(CanonicalPersonalization {
        occasion: Some("Birthday".into()),
        ..canonical()
    })
    .normalize()
    .unwrap();
    assert!(details.customization_id.is_some());
    assert_eq!(details.extra_cost, Some(3.0));

    let kept = Personalization::from(CanonicalPersonalization {
        customization_id: Some("CUST-7".into()),
        custom_message: Some("hi".into()),
        ..canonical()
    })
    .normalize()
    .unwrap();
    assert_eq!(kept.customization_id(), Some("CUST-7"));
}

#[test]
fn canonical_flower_count_may_be_text() {
    let Some(Personalization::Canonical(details)) = Personalization::from_value(json!({
        "customization_id": "CUST-1",
        "flowers": { "count": "5", "color": "Red" }
    })) else {
        panic!("expected a canonical record");
    };
    assert_eq!(calculate_extra_cost(&details), 5.0);
    assert_eq!(details.flowers.and_then(|f| f.color).as_deref(), Some("Red"));
}
