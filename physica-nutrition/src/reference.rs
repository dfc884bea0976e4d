//! Daily reference intakes.

use std::sync::LazyLock;

use physica_units::{standard, Quantity};

use crate::amount::NutrientAmount;

fn mg(value: f64) -> Quantity {
    Quantity::canonical(standard::MASS, value * 1e-6)
}

fn ug(value: f64) -> Quantity {
    Quantity::canonical(standard::MASS, value * 1e-9)
}

/// Daily reference intakes for vitamins and minerals from EU Regulation
/// 1169/2011, annex XIII.
pub static EU_RDI: LazyLock<NutrientAmount> = LazyLock::new(|| {
    let pairs = [
        ("vitamin a", ug(800.0)),
        ("vitamin d", ug(5.0)),
        ("vitamin e", mg(12.0)),
        ("vitamin k", ug(75.0)),
        ("vitamin c", mg(80.0)),
        ("thiamin", mg(1.1)),
        ("riboflavin", mg(1.4)),
        ("niacin", mg(16.0)),
        ("vitamin b6", mg(1.4)),
        ("folic acid", ug(200.0)),
        ("vitamin b12", ug(2.5)),
        ("biotin", ug(50.0)),
        ("pantothenic acid", mg(6.0)),
        ("potassium", mg(2000.0)),
        ("chloride", mg(800.0)),
        ("calcium", mg(800.0)),
        ("phosphorus", mg(700.0)),
        ("magnesium", mg(375.0)),
        ("iron", mg(14.0)),
        ("zinc", mg(10.0)),
        ("copper", mg(1.0)),
        ("manganese", mg(2.0)),
        ("fluoride", mg(3.5)),
        ("selenium", ug(55.0)),
        ("chromium", ug(40.0)),
        ("molybdenum", ug(50.0)),
        ("iodine", ug(150.0)),
    ];
    let mut reference = NutrientAmount::new();
    for (nutrient, amount) in pairs {
        reference = reference
            .with(nutrient, amount)
            .expect("reference intakes are masses");
    }
    reference
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reference_values_are_masses_in_expected_ranges() {
        assert_eq!(EU_RDI.len(), 27);
        let iron = EU_RDI.get("iron").unwrap();
        assert_eq!(iron.family(), standard::MASS);
        assert_relative_eq!(iron.to("mg").unwrap(), 14.0, max_relative = 1e-12);
        assert_relative_eq!(
            EU_RDI.get("vitamin a").unwrap().to("ug").unwrap(),
            800.0,
            max_relative = 1e-12,
        );
    }
}
