use std::sync::LazyLock;

use crate::models::NutrientEntry;
use crate::tables::NutrientTable;

/// Grams of protein, common Indian foods.
const PROTEIN_ROWS: &[(&str, f64, &str)] = &[
    ("Paneer", 18.0, "per 100g"),
    ("Milk", 3.4, "per 100g"),
    ("Curd", 3.5, "per 100g"),
    ("Buttermilk", 2.0, "per 100g"),
    ("Cheese", 25.0, "per 100g"),
    ("Whey Protein", 24.0, "per scoop (30g)"),
    ("Toor Dal", 22.0, "per 100g"),
    ("Moong Dal", 24.0, "per 100g"),
    ("Chana Dal", 21.0, "per 100g"),
    ("Masoor Dal", 19.0, "per 100g"),
    ("Urad Dal", 25.0, "per 100g"),
    ("Rajma", 24.0, "per 100g"),
    ("Chole", 19.0, "per 100g"),
    ("Soybeans", 36.0, "per 100g"),
    ("Moth Beans", 23.0, "per 100g"),
    ("Horse Gram", 22.0, "per 100g"),
    ("Rice, White", 7.0, "per 100g"),
    ("Brown Rice", 8.0, "per 100g"),
    ("Wheat Flour", 12.0, "per 100g"),
    ("Ragi", 7.0, "per 100g"),
    ("Jowar", 10.0, "per 100g"),
    ("Bajra", 11.0, "per 100g"),
    ("Oats", 16.0, "per 100g"),
    ("Quinoa", 14.0, "per 100g"),
    ("Peanuts", 25.0, "per 100g"),
    ("Almonds", 21.0, "per 100g"),
    ("Cashews", 18.0, "per 100g"),
    ("Walnuts", 15.0, "per 100g"),
    ("Pistachios", 20.0, "per 100g"),
    ("Sunflower Seeds", 21.0, "per 100g"),
    ("Pumpkin Seeds", 30.0, "per 100g"),
    ("Flax Seeds", 18.0, "per 100g"),
    ("Chia Seeds", 17.0, "per 100g"),
    ("Sesame Seeds", 18.0, "per 100g"),
    ("Egg", 6.0, "per 1 piece"),
    ("Chicken Breast", 31.0, "per 100g"),
    ("Chicken Thigh", 24.0, "per 100g"),
    ("Mutton", 26.0, "per 100g"),
    ("Beef", 26.0, "per 100g"),
    ("Fish, Rohu", 19.0, "per 100g"),
    ("Fish, Hilsa", 21.0, "per 100g"),
    ("Fish, Pomfret", 20.0, "per 100g"),
    ("Prawns", 24.0, "per 100g"),
];

/// Grams of sugar.
const SUGAR_ROWS: &[(&str, f64, &str)] = &[
    ("Table Sugar", 100.0, "per 100g"),
    ("Tea Spoon Sugar", 4.0, "per tsp (4g)"),
    ("Soft Drink (Cola)", 10.6, "per 100ml"),
    ("Fruit Juice (Packaged)", 11.0, "per 100ml"),
    ("Indian Sweet (Gulab Jamun)", 35.0, "per piece (~50g)"),
    ("Indian Sweet (Rasgulla)", 30.0, "per piece (~40g)"),
    ("Chocolate (Milk)", 52.0, "per 100g"),
    ("Candy", 70.0, "per 100g"),
    ("Ice Cream", 20.0, "per 100g"),
    ("Ketchup", 22.0, "per 100g"),
    ("White Bread", 5.0, "per 100g"),
    ("Banana", 12.0, "per 100g"),
    ("Mango", 14.0, "per 100g"),
    ("Apple", 10.0, "per 100g"),
    ("Orange", 9.0, "per 100g"),
    ("Grapes", 16.0, "per 100g"),
    ("Dates (Khajoor)", 66.0, "per 100g"),
    ("Honey", 82.0, "per 100g"),
];

/// Metabolic equivalents per workout type.
pub const MET_TABLE: &[(&str, f64)] = &[
    ("Running (6 mph / 10 km/h)", 9.8),
    ("Running (8 mph / 12.8 km/h)", 11.8),
    ("Cycling (moderate)", 7.5),
    ("Cycling (vigorous)", 10.0),
    ("Swimming (moderate)", 6.0),
    ("Swimming (vigorous)", 9.5),
    ("Walking (4 km/h)", 3.5),
    ("Walking (6 km/h)", 4.8),
    ("Yoga", 2.5),
    ("HIIT / CrossFit", 8.0),
    ("Weight Training", 6.0),
    ("Dancing", 5.5),
];

fn build(rows: &[(&str, f64, &str)]) -> NutrientTable {
    NutrientTable::new(
        rows.iter()
            .map(|&(name, amount, unit)| NutrientEntry::new(name, amount, unit))
            .collect(),
    )
}

pub static PROTEIN_TABLE: LazyLock<NutrientTable> = LazyLock::new(|| build(PROTEIN_ROWS));

pub static SUGAR_TABLE: LazyLock<NutrientTable> = LazyLock::new(|| build(SUGAR_ROWS));

/// MET for an activity name, if known.
pub fn met_for(activity: &str) -> Option<f64> {
    MET_TABLE
        .iter()
        .find(|(name, _)| *name == activity)
        .map(|&(_, met)| met)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_have_unique_names() {
        assert_eq!(PROTEIN_TABLE.len(), PROTEIN_ROWS.len());
        assert_eq!(SUGAR_TABLE.len(), SUGAR_ROWS.len());
    }

    #[test]
    fn test_builtin_entries_are_valid() {
        assert!(PROTEIN_TABLE.entries().iter().all(|e| e.is_valid()));
        assert!(SUGAR_TABLE.entries().iter().all(|e| e.is_valid()));
    }

    #[test]
    fn test_met_lookup() {
        assert_eq!(met_for("Yoga"), Some(2.5));
        assert_eq!(met_for("Chess"), None);
    }
}
