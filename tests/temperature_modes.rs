//! 온도 변환 방식별 동작 테스트.
use universal_converter::{Category, ConversionRequest, Converter, TemperatureMode};

fn temp(conv: &Converter<'_>, value: f64, from: &str, to: &str) -> f64 {
    conv.convert(&ConversionRequest {
        value,
        from_unit: from,
        to_unit: to,
        category: Category::Temperature,
    })
}

#[test]
fn normalized_mode_round_trips() {
    let conv = Converter::builtin(TemperatureMode::Normalized);
    for (from, to) in [
        ("celsius", "fahrenheit"),
        ("fahrenheit", "kelvin"),
        ("kelvin", "celsius"),
    ] {
        let back = temp(&conv, temp(&conv, 37.5, from, to), to, from);
        assert!((back - 37.5).abs() < 1e-9, "{from} <-> {to}: {back}");
    }
    assert!((temp(&conv, 212.0, "fahrenheit", "celsius") - 100.0).abs() < 1e-9);
}

#[test]
fn raw_mode_treats_input_as_celsius() {
    let conv = Converter::builtin(TemperatureMode::Raw);
    // 300 K 를 300 °C 로 간주한다
    assert!((temp(&conv, 300.0, "kelvin", "fahrenheit") - 572.0).abs() < 1e-9);
    assert!((temp(&conv, 50.0, "fahrenheit", "celsius") - 50.0).abs() < 1e-9);
    assert_eq!(temp(&conv, 50.0, "fahrenheit", "fahrenheit"), 50.0);
}

#[test]
fn modes_agree_when_source_is_celsius() {
    let normalized = Converter::builtin(TemperatureMode::Normalized);
    let raw = Converter::builtin(TemperatureMode::Raw);
    for to in ["fahrenheit", "kelvin"] {
        assert_eq!(
            temp(&normalized, -12.0, "celsius", to),
            temp(&raw, -12.0, "celsius", to)
        );
    }
}

#[test]
fn modes_do_not_affect_linear_categories() {
    let raw = Converter::builtin(TemperatureMode::Raw);
    let req = ConversionRequest {
        value: 2.0,
        from_unit: "pound",
        to_unit: "g",
        category: Category::Weight,
    };
    assert!((raw.convert(&req) - 907.184).abs() < 1e-9);
}
