//! Product type module - coarse jewelry category tags

use crate::attribute::AttributeKey;

/// Coarse jewelry category tag from the source catalog
///
/// Every extraction branch selects on this tag. Parsing is total:
/// unrecognized or empty tags become [`ProductType::Unknown`], which makes
/// every type-specific branch decline instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// Signet ring
    Sello,
    /// Hoop earrings
    Aros,
    /// Earrings
    Pendientes,
    /// Pendant
    Colgante,
    /// Medal
    Medalla,
    /// Chain
    Cadena,
    /// Necklace
    Collar,
    /// Choker
    Gargantilla,
    /// Cord
    Cordon,
    /// Bracelet
    Pulsera,
    /// Bangle
    Esclava,
    /// Wedding band
    Alianza,
    /// Solitaire ring
    Solitario,
    /// Ring
    Sortija,
    /// Scapular
    Escapulario,
    /// Crucifix figure
    Cristo,
    /// Zodiac piece
    Horoscopo,
    /// Disc pendant
    Disco,
    /// Brooch
    Broche,
    /// Cufflinks
    Gemelos,
    /// Unrecognized or empty tag
    Unknown,
}

/// Lowercases and folds Spanish accented vowels so that catalog tags like
/// `"Cordón"` and `"cordon"` parse identically.
fn fold_tag(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c.to_lowercase().next().unwrap_or(c) {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            other => other,
        })
        .collect()
}

impl ProductType {
    /// Get the canonical lowercase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Sello => "sello",
            ProductType::Aros => "aros",
            ProductType::Pendientes => "pendientes",
            ProductType::Colgante => "colgante",
            ProductType::Medalla => "medalla",
            ProductType::Cadena => "cadena",
            ProductType::Collar => "collar",
            ProductType::Gargantilla => "gargantilla",
            ProductType::Cordon => "cordon",
            ProductType::Pulsera => "pulsera",
            ProductType::Esclava => "esclava",
            ProductType::Alianza => "alianza",
            ProductType::Solitario => "solitario",
            ProductType::Sortija => "sortija",
            ProductType::Escapulario => "escapulario",
            ProductType::Cristo => "cristo",
            ProductType::Horoscopo => "horoscopo",
            ProductType::Disco => "disco",
            ProductType::Broche => "broche",
            ProductType::Gemelos => "gemelos",
            ProductType::Unknown => "",
        }
    }

    /// Parse a catalog tag. Total: never fails, case- and accent-insensitive.
    pub fn parse(s: &str) -> Self {
        match fold_tag(s).as_str() {
            "sello" => ProductType::Sello,
            "aros" => ProductType::Aros,
            "pendientes" => ProductType::Pendientes,
            "colgante" => ProductType::Colgante,
            "medalla" => ProductType::Medalla,
            "cadena" => ProductType::Cadena,
            "collar" => ProductType::Collar,
            "gargantilla" => ProductType::Gargantilla,
            "cordon" => ProductType::Cordon,
            "pulsera" => ProductType::Pulsera,
            "esclava" => ProductType::Esclava,
            "alianza" => ProductType::Alianza,
            "solitario" => ProductType::Solitario,
            "sortija" => ProductType::Sortija,
            "escapulario" => ProductType::Escapulario,
            "cristo" => ProductType::Cristo,
            "horoscopo" => ProductType::Horoscopo,
            "disco" => ProductType::Disco,
            "broche" => ProductType::Broche,
            "gemelos" => ProductType::Gemelos,
            _ => ProductType::Unknown,
        }
    }

    /// Types whose descriptions carry a total length (`largo`)
    pub fn bears_length(&self) -> bool {
        matches!(
            self,
            ProductType::Esclava
                | ProductType::Pulsera
                | ProductType::Cadena
                | ProductType::Collar
                | ProductType::Gargantilla
                | ProductType::Cordon
        )
    }

    /// Types the shape/letter classifier applies to
    pub fn bears_shape(&self) -> bool {
        matches!(
            self,
            ProductType::Pendientes
                | ProductType::Colgante
                | ProductType::Collar
                | ProductType::Cadena
                | ProductType::Gargantilla
                | ProductType::Pulsera
        )
    }

    /// Necklace-like types share the `forma_colgante` key
    pub fn is_necklace_like(&self) -> bool {
        matches!(
            self,
            ProductType::Colgante
                | ProductType::Collar
                | ProductType::Cadena
                | ProductType::Gargantilla
        )
    }

    /// The `forma_*` key this type's shape classification writes to
    pub fn shape_key(&self) -> Option<AttributeKey> {
        if self.is_necklace_like() {
            return Some(AttributeKey::FormaColgante);
        }
        match self {
            ProductType::Pendientes => Some(AttributeKey::FormaPendientes),
            ProductType::Pulsera => Some(AttributeKey::FormaPulsera),
            _ => None,
        }
    }

    /// Slot a lone unlabeled `N mm` value routes to for this type
    pub fn mm_fallback_slot(&self) -> Option<AttributeKey> {
        match self {
            ProductType::Alianza | ProductType::Solitario | ProductType::Sortija => {
                Some(AttributeKey::Ancho)
            }
            ProductType::Colgante | ProductType::Medalla | ProductType::Escapulario => {
                Some(AttributeKey::Diametro)
            }
            ProductType::Esclava | ProductType::Pulsera => Some(AttributeKey::Grosor),
            ProductType::Cadena | ProductType::Collar => Some(AttributeKey::Ancho),
            _ => None,
        }
    }
}

impl std::str::FromStr for ProductType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
