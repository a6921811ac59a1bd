//! Religious/decorative figure matching
//!
//! First-match-wins lookup over the figure dictionary, in declaration
//! order — not longest-match, in contrast with the shape classifier.
//! Specific figures are therefore declared before the generic fallbacks
//! ("Virgen del Pilar" before "Virgen"). Variants match on word
//! boundaries, not bare substrings.
//!
//! Medals receive `figura_medalla`; pendants receive `forma_colgante`,
//! which the shape classifier may later overwrite (the orchestrator runs
//! it afterwards by design).

use joyero_domain::{AttributeKey, AttributeMap, ProductType};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalizer::normalize;

struct FigureEntry {
    display: &'static str,
    variants: &'static [&'static str],
}

macro_rules! figure {
    ($display:literal, $($variant:literal),+ $(,)?) => {
        FigureEntry { display: $display, variants: &[$($variant),+] }
    };
}

/// The figure dictionary. Declaration order is the tie-break: the first
/// entry with any matching variant wins.
static FIGURES: &[FigureEntry] = &[
    // Named virgins, most specific advocations first
    figure!("Virgen del Pilar", "virgen del pilar", "pilarica"),
    figure!("Virgen del Carmen", "virgen del carmen"),
    figure!("Virgen del Rocio", "virgen del rocio"),
    figure!("Virgen de Guadalupe", "virgen de guadalupe"),
    figure!("Virgen de Fatima", "virgen de fatima"),
    figure!("Virgen de Lourdes", "virgen de lourdes"),
    figure!("Virgen de Covadonga", "virgen de covadonga", "santina"),
    figure!("Virgen de Montserrat", "virgen de montserrat", "moreneta"),
    figure!("Virgen de la Almudena", "virgen de la almudena", "almudena"),
    figure!("Virgen de la Macarena", "virgen de la macarena", "macarena"),
    figure!("Virgen del Rosario", "virgen del rosario"),
    figure!("Virgen de los Desamparados", "virgen de los desamparados", "desamparados"),
    figure!("Virgen de la Cabeza", "virgen de la cabeza"),
    figure!("Virgen de las Angustias", "virgen de las angustias"),
    figure!("Virgen de los Dolores", "virgen de los dolores", "dolorosa"),
    figure!("Virgen de la Paloma", "virgen de la paloma"),
    figure!("Virgen de Begona", "virgen de begona"),
    figure!("Virgen de la Candelaria", "virgen de la candelaria", "candelaria"),
    figure!("Virgen de la Merced", "virgen de la merced"),
    figure!("Virgen de la Soledad", "virgen de la soledad"),
    figure!("Virgen de la Esperanza", "virgen de la esperanza"),
    figure!("Virgen de la Fuensanta", "virgen de la fuensanta", "fuensanta"),
    figure!("Virgen de los Remedios", "virgen de los remedios"),
    figure!("Virgen del Valle", "virgen del valle"),
    figure!("Virgen del Mar", "virgen del mar"),
    figure!("Virgen de Torreciudad", "virgen de torreciudad", "torreciudad"),
    figure!("Virgen Blanca", "virgen blanca"),
    figure!("Virgen Milagrosa", "virgen milagrosa", "milagrosa"),
    figure!("Virgen Nina", "virgen nina"),
    figure!("Virgen con Nino", "virgen con nino"),
    figure!("Maria Auxiliadora", "maria auxiliadora", "auxiliadora"),
    figure!("Caridad del Cobre", "caridad del cobre"),
    figure!("Inmaculada", "inmaculada", "purisima"),
    // Christ and the Holy Family
    figure!("Sagrado Corazon", "sagrado corazon"),
    figure!("Corazon de Maria", "corazon de maria", "inmaculado corazon"),
    figure!("Cristo de la Buena Muerte", "cristo de la buena muerte"),
    figure!("Cristo Crucificado", "cristo crucificado"),
    figure!("Crucifijo", "crucifijo"),
    figure!("Nino Jesus", "nino jesus"),
    figure!("Nino del Remedio", "nino del remedio"),
    figure!("Sagrada Familia", "sagrada familia"),
    figure!("Espiritu Santo", "espiritu santo"),
    figure!("Santa Faz", "santa faz"),
    // Saints
    figure!("San Antonio", "san antonio"),
    figure!("San Benito", "san benito"),
    figure!("San Blas", "san blas"),
    figure!("San Cayetano", "san cayetano"),
    figure!("San Cristobal", "san cristobal"),
    figure!("San Fermin", "san fermin"),
    figure!("San Francisco", "san francisco"),
    figure!("San Isidro", "san isidro"),
    figure!("San Jorge", "san jorge"),
    figure!("San Jose", "san jose"),
    figure!("San Juan", "san juan"),
    figure!("San Judas Tadeo", "san judas tadeo", "san judas"),
    figure!("San Lazaro", "san lazaro"),
    figure!("San Martin", "san martin"),
    figure!("San Miguel", "san miguel"),
    figure!("San Nicolas", "san nicolas"),
    figure!("San Pancracio", "san pancracio"),
    figure!("San Pablo", "san pablo"),
    figure!("San Pedro", "san pedro"),
    figure!("San Rafael", "san rafael"),
    figure!("San Ramon", "san ramon"),
    figure!("San Roque", "san roque"),
    figure!("San Sebastian", "san sebastian"),
    figure!("San Valentin", "san valentin"),
    figure!("Santiago Apostol", "santiago apostol", "santiago"),
    figure!("Santo Domingo", "santo domingo"),
    figure!("Santo Tomas", "santo tomas"),
    figure!("Santa Ana", "santa ana"),
    figure!("Santa Barbara", "santa barbara"),
    figure!("Santa Catalina", "santa catalina"),
    figure!("Santa Cecilia", "santa cecilia"),
    figure!("Santa Clara", "santa clara"),
    figure!("Santa Elena", "santa elena"),
    figure!("Santa Gema", "santa gema"),
    figure!("Santa Isabel", "santa isabel"),
    figure!("Santa Lucia", "santa lucia"),
    figure!("Santa Marta", "santa marta"),
    figure!("Santa Rita", "santa rita"),
    figure!("Santa Teresa", "santa teresa"),
    figure!("Fray Leopoldo", "fray leopoldo"),
    figure!("Padre Pio", "padre pio"),
    figure!("Don Bosco", "don bosco"),
    // Guardian figures and generic fallbacks, last by design
    figure!("Angel de la Guarda", "angel de la guarda"),
    figure!("Angelito", "angelito", "angel burlon"),
    figure!("Cruz de Caravaca", "cruz de caravaca", "caravaca"),
    figure!("Escapulario", "escapulario"),
    figure!("Cristo", "cristo"),
    figure!("Virgen", "virgen"),
    figure!("Angel", "angel"),
    figure!("Cruz", "cruz"),
];

static COMPILED: Lazy<Vec<(&'static str, Vec<Regex>)>> = Lazy::new(|| {
    FIGURES
        .iter()
        .map(|entry| {
            let patterns = entry
                .variants
                .iter()
                .map(|variant| Regex::new(&format!(r"\b{variant}\b")).unwrap())
                .collect();
            (entry.display, patterns)
        })
        .collect()
});

/// Match the first declared figure present in the description
///
/// Applicable to medals and pendants only. Medals get `figura_medalla`;
/// pendants get `forma_colgante`.
pub fn extract_figure(description: &str, product_type: ProductType) -> AttributeMap {
    let mut map = AttributeMap::new();
    let key = match product_type {
        ProductType::Medalla => AttributeKey::FiguraMedalla,
        ProductType::Colgante => AttributeKey::FormaColgante,
        _ => return map,
    };

    let text = normalize(description);
    if text.is_empty() {
        return map;
    }

    for (display, patterns) in COMPILED.iter() {
        if patterns.iter().any(|pattern| pattern.is_match(&text)) {
            map.insert(key, *display);
            break;
        }
    }

    map
}
