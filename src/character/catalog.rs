//! Category tables used when generating characters

pub const UNIVERSES: &[&str] = &[
    "Tierra-616",
    "Tierra-199999",
    "Multiverso-X",
    "Dimensión Fantasma",
    "Neo-Zion",
    "Tierra Invertida",
    "Universo Omega",
    "Realidad DistorSión",
];

pub const SPECIES: &[&str] = &[
    "Humano",
    "Alienígena",
    "Mutante",
    "Androide",
    "Dios cósmico",
    "Entidad dimensional",
    "Cyborg",
];

pub const PLANETS: &[&str] = &[
    "Tierra",
    "Krypton",
    "Namek",
    "Saturno Prime",
    "Vulcano",
    "Xandar",
    "Asgard",
    "Marte Negro",
    "Zebes",
];

pub const ABILITIES: &[&str] = &[
    "Teletransportación",
    "Invisibilidad",
    "Fuerza sobrehumana",
    "Control mental",
    "Manipulación del tiempo",
    "Vuelo",
    "Rayos láser",
    "Regeneración",
    "Control elemental",
    "Tecnopatía",
    "Magia arcana",
    "Crecimiento gigante",
    "Creación de portales",
    "Dominar sombras",
    "Velocidad sobrehumana",
];

pub const EPIC_PHRASES: &[&str] = &[
    "¡Mi poder no conoce límites!",
    "El multiverso temblará ante mí.",
    "Hoy no es el día en que muero.",
    "¡Por la gloria de mi universo!",
    "Incluso los dioses me temen.",
    "No soy un héroe... soy una leyenda.",
    "Del caos, yo nací. Al caos, yo volveré.",
    "Solo yo puedo cambiar el destino.",
    "Nada es real, excepto mi voluntad.",
    "Soy el principio... y el final.",
];

/// Inclusive range of generated ids
pub const ID_RANGE: (i64, i64) = (1000, 9999);

/// Inclusive range of generated power levels
pub const POWER_LEVEL_RANGE: (i64, i64) = (1, 100);

/// Inclusive range of generated ability counts
pub const ABILITY_COUNT_RANGE: (usize, usize) = (2, 6);
