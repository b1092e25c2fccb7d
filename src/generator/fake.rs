//! Fake data provider
//!
//! Supplies the human-looking strings of a generated character (names and
//! avatar links). [`NameBank`] draws from built-in name tables.

use crate::random::RandomSource;

/// Source of synthetic names and avatar references
pub trait FakeData: Send + Sync {
    fn first_name(&self, rng: &dyn RandomSource) -> String;

    fn last_name(&self, rng: &dyn RandomSource) -> String;

    /// Opaque avatar image reference
    fn avatar_url(&self, rng: &dyn RandomSource) -> String;
}

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alba", "Alejandro", "Amara", "Andrés", "Aria", "Bruno", "Camila", "Carlos",
    "Clara", "Dante", "Diego", "Elena", "Emma", "Enzo", "Esteban", "Eva", "Felipe", "Gael",
    "Greta", "Hugo", "Inés", "Iris", "Iván", "Jade", "Javier", "Julia", "Kai", "Lara",
    "Leo", "Lucía", "Luna", "Marco", "Martina", "Mateo", "Nadia", "Nico", "Noa", "Olivia",
    "Omar", "Pablo", "Paula", "Rafael", "Rosa", "Sara", "Santiago", "Sofía", "Tomás",
    "Valeria", "Víctor", "Ximena", "Yago", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Acosta", "Blanco", "Castillo", "Delgado", "Espinoza", "Fernández", "García", "Guerrero",
    "Herrera", "Ibarra", "Jiménez", "Lozano", "Medina", "Navarro", "Ortega", "Pérez",
    "Quintero", "Ramírez", "Salazar", "Torres", "Uribe", "Vargas", "Vega", "Zamora",
];

const AVATAR_BASE: &str = "https://avatars.githubusercontent.com/u/";

/// Name tables bundled with the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct NameBank;

impl FakeData for NameBank {
    fn first_name(&self, rng: &dyn RandomSource) -> String {
        FIRST_NAMES[rng.index(FIRST_NAMES.len())].to_string()
    }

    fn last_name(&self, rng: &dyn RandomSource) -> String {
        LAST_NAMES[rng.index(LAST_NAMES.len())].to_string()
    }

    fn avatar_url(&self, rng: &dyn RandomSource) -> String {
        format!("{}{}", AVATAR_BASE, rng.range(1, 99_999_999))
    }
}
