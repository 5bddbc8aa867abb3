//! 선택 상태(카테고리 전환, 단위 교환) 테스트.
use universal_converter::state::StateError;
use universal_converter::units::{ConversionTable, LinearEntry, UnitTable};
use universal_converter::{Category, Converter, SelectionState, TemperatureMode};

#[test]
fn defaults_pick_first_and_second_unit() {
    let table = ConversionTable::builtin();
    for category in Category::ALL {
        let units = table.units(category);
        let state = SelectionState::new(category);
        assert_eq!(state.from_unit(), units[0]);
        assert_eq!(state.to_unit(), units[1]);
        assert_eq!(state.value(), 0.0);
    }
}

#[test]
fn swap_exchanges_units_and_twice_restores() {
    let mut state = SelectionState::new(Category::Temperature);
    state.set_value(100.0).unwrap();
    let (from, to) = (state.from_unit(), state.to_unit());
    state.swap();
    assert_eq!((state.from_unit(), state.to_unit()), (to, from));
    assert_eq!(state.value(), 100.0);
    state.swap();
    assert_eq!((state.from_unit(), state.to_unit()), (from, to));
}

#[test]
fn swap_changes_result() {
    let conv = Converter::default();
    let mut state = SelectionState::new(Category::Length);
    state.set_value(1.0).unwrap();
    state.set_from_unit("km").unwrap();
    state.set_to_unit("m").unwrap();
    assert_eq!(state.result_label(&conv), "1000.0000 m");
    state.swap();
    assert_eq!(state.result_label(&conv), "0.0010 km");
}

#[test]
fn category_switch_keeps_valid_units_and_resets_others() {
    let mut state = SelectionState::new(Category::Length);
    state.set_from_unit("foot").unwrap();
    state.set_category(Category::Weight);
    assert_eq!(state.from_unit(), "mg");
    assert_eq!(state.to_unit(), "g");
    for unit in [state.from_unit(), state.to_unit()] {
        assert!(state.units().contains(&unit));
    }
    state.set_category(Category::Weight);
    assert_eq!(state.from_unit(), "mg");
}

#[test]
fn units_outside_category_are_rejected() {
    let mut state = SelectionState::new(Category::Volume);
    assert_eq!(
        state.set_to_unit("kelvin"),
        Err(StateError::UnitNotInCategory {
            unit: "kelvin".into(),
            category: Category::Volume
        })
    );
    assert_eq!(state.to_unit(), "l");
    assert!(state.set_value(-1.0).is_err());
    assert!(state.set_value(f64::NAN).is_err());
}

#[test]
fn single_unit_category_selects_it_twice() {
    let table = ConversionTable::default().with_table(
        Category::Length,
        UnitTable::linear("m", vec![LinearEntry::new("m", 1.0)]),
    );
    let state = SelectionState::with_table(&table, Category::Length);
    assert_eq!(state.from_unit(), "m");
    assert_eq!(state.to_unit(), "m");
}

#[test]
fn state_borrows_custom_table() {
    let table = ConversionTable::default().with_table(
        Category::Weight,
        UnitTable::linear(
            "g",
            vec![LinearEntry::new("g", 1.0), LinearEntry::new("kg", 1000.0)],
        ),
    );
    let conv = Converter::new(&table, TemperatureMode::Normalized);
    let mut state = SelectionState::with_table(&table, Category::Weight);
    state.set_value(2.0).unwrap();
    state.swap();
    assert_eq!(state.result_label(&conv), "2000.0000 g");
}
