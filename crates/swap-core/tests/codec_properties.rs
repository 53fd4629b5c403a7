use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use swap_core::codec::{DateFormat, FieldType};
use swap_core::render::render_blob;
use swap_core::{parse_blob, BlobKey, Section, SectionKind, Value};

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..73_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid epoch") + Duration::days(offset)
    })
}

fn arb_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]([A-Za-z0-9_. -]{0,18}[A-Za-z0-9_.-])?"
}

fn names(items: &[&str]) -> Value {
    Value::TextList(items.iter().map(|item| item.to_string()).collect())
}

#[test]
fn name_lists_reject_items_that_would_not_read_back() {
    let field = FieldType::TextList;
    let from_file = field.parse("'rain,,drainage'").expect_err("empty item in file");
    let unrepresentable: [&[&str]; 5] = [&["a,b"], &[" a"], &["a "], &[""], &["rain", ""]];
    for items in unrepresentable {
        let error = field.coerce(names(items)).expect_err("unrepresentable item");
        assert_eq!(error, from_file, "{items:?}");
    }

    let accepted = field.coerce(names(&["rain", "net drainage"])).expect("plain names");
    assert_eq!(field.render(&accepted), "'rain,net drainage'");
    assert_eq!(field.parse(&field.render(&accepted)).expect("rendered list"), accepted);
}

#[test]
fn decimals_that_overflow_when_scaled_are_rejected() {
    assert!(FieldType::Decimal(3).coerce(Value::Float(1.0e306)).is_err());
    assert!(FieldType::Decimal(3).coerce(Value::Int(i64::MAX)).is_ok());
    assert!(FieldType::FloatList(4).coerce(Value::FloatList(vec![0.5, 1.0e306])).is_err());
}

proptest! {
    #[test]
    fn fixed_decimals_read_back_unchanged(value in -1.0e6f64..1.0e6, places in 0u8..=4) {
        let field = FieldType::Decimal(places);
        let stored = field.coerce(Value::Float(value)).expect("finite decimal");
        let reread = field.parse(&field.render(&stored)).expect("rendered decimal");
        prop_assert_eq!(reread, stored);
    }

    #[test]
    fn floats_read_back_exactly(value in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        let field = FieldType::Float;
        let stored = Value::Float(value);
        let rendered = field.render(&stored);
        prop_assert_eq!(field.parse(&rendered).expect("rendered float"), stored);
    }

    #[test]
    fn fortran_and_e_exponents_agree(mantissa in -9999i32..9999, exponent in -30i32..30) {
        let field = FieldType::Float;
        let fortran = field.parse(&format!("{mantissa}.5d{exponent}")).expect("d exponent");
        let upper = field.parse(&format!("{mantissa}.5D{exponent}")).expect("D exponent");
        let modern = field.parse(&format!("{mantissa}.5e{exponent}")).expect("e exponent");
        prop_assert_eq!(&fortran, &modern);
        prop_assert_eq!(&upper, &modern);
    }

    #[test]
    fn dates_read_back_in_either_format(date in arb_date()) {
        for format in [DateFormat::Iso, DateFormat::DayMonthName] {
            let field = FieldType::Date(format);
            let rendered = field.render(&Value::Date(date));
            prop_assert_eq!(field.parse(&rendered).expect("rendered date"), Value::Date(date));
        }
    }

    #[test]
    fn quoted_text_reads_back(text in arb_text()) {
        let field = FieldType::Text;
        let rendered = field.render(&Value::Text(text.clone()));
        prop_assert!(rendered.starts_with('\''));
        prop_assert_eq!(field.parse(&rendered).expect("rendered text"), Value::Text(text));
    }

    #[test]
    fn name_lists_read_back(items in prop::collection::vec("[a-z][a-z_]{0,10}", 0..6)) {
        let field = FieldType::TextList;
        let stored = field.coerce(Value::TextList(items)).expect("plain names");
        prop_assert_eq!(field.parse(&field.render(&stored)).expect("rendered list"), stored);
    }

    #[test]
    fn snow_sections_read_back(
        rain in 0.0f64..10.0,
        snow in -10.0f64..0.0,
        initial in 0.0f64..1000.0,
    ) {
        let section = Section::builder(SectionKind::SnowAndFrost)
            .set("swsnow", 1)
            .set("snowinco", initial)
            .set("teprrain", rain)
            .set("teprsnow", snow)
            .build()
            .expect("values inside their bounds");
        let key = BlobKey::main();
        let text = render_blob(&key, std::slice::from_ref(&section));
        let parsed = parse_blob(&key, &text).expect("rendered blob parses");
        prop_assert_eq!(parsed, vec![section]);
    }
}
