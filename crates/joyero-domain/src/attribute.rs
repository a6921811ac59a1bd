//! Attribute vocabulary - the closed set of output keys

/// Scalar type an attribute value carries when serialized as a metafield
///
/// The sync collaborator enforces the type on serialization; the engine
/// only guarantees decimal values render with a `.` separator and no
/// trailing `.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Decimal number rendered as a string
    Decimal,
    /// Short free text
    Text,
}

/// One structured key in the output map
///
/// The vocabulary is closed: classifiers can only ever produce these keys,
/// so no unknown attribute can leak into the e-commerce metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// Height in mm
    Alto,
    /// Width in mm
    Ancho,
    /// Thickness in mm
    Grosor,
    /// Total length in cm
    Largo,
    /// Diameter in mm
    Diametro,
    /// Combined `AxB` dimensions
    Medidas,
    /// Signet face dimensions
    MedidasChaton,
    /// Signet engraving-zone dimensions
    MedidasZonaGrabado,
    /// Diamond carat weight
    KilatesDiamante,
    /// Diamond color grade
    ColorDiamante,
    /// Diamond clarity grade
    CalidadDiamante,
    /// Stone name list
    Piedra,
    /// Stone quality
    CalidadPiedra,
    /// Weight in grams
    Peso,
    /// Decorative shape for necklace-like pieces
    FormaColgante,
    /// Decorative shape for earrings
    FormaPendientes,
    /// Decorative shape for bracelets
    FormaPulsera,
    /// Single-letter initial
    Letra,
    /// Religious/decorative medal figure
    FiguraMedalla,
    /// Medal sub-type
    TipoMedalla,
    /// Earring sub-type
    TipoPendientes,
    /// Chain link sub-type
    TipoCadena,
    /// Chain complexity (Simple/Compuesta)
    Cadena,
    /// Zodiac sign display name
    SimboloZodiaco,
    /// Intended wearer (from the gender column)
    Destinatario,
    /// Clasp type
    Cierre,
    /// Gold material (18k/9k)
    Material,
    /// Gold color
    ColorOro,
}

impl AttributeKey {
    /// The snake_case metafield key this attribute serializes under
    pub fn key(&self) -> &'static str {
        match self {
            AttributeKey::Alto => "alto",
            AttributeKey::Ancho => "ancho",
            AttributeKey::Grosor => "grosor",
            AttributeKey::Largo => "largo",
            AttributeKey::Diametro => "diametro",
            AttributeKey::Medidas => "medidas",
            AttributeKey::MedidasChaton => "medidas_chaton",
            AttributeKey::MedidasZonaGrabado => "medidas_zona_grabado",
            AttributeKey::KilatesDiamante => "kilates_diamante",
            AttributeKey::ColorDiamante => "color_diamante",
            AttributeKey::CalidadDiamante => "calidad_diamante",
            AttributeKey::Piedra => "piedra",
            AttributeKey::CalidadPiedra => "calidad_piedra",
            AttributeKey::Peso => "peso",
            AttributeKey::FormaColgante => "forma_colgante",
            AttributeKey::FormaPendientes => "forma_pendientes",
            AttributeKey::FormaPulsera => "forma_pulsera",
            AttributeKey::Letra => "letra",
            AttributeKey::FiguraMedalla => "figura_medalla",
            AttributeKey::TipoMedalla => "tipo_medalla",
            AttributeKey::TipoPendientes => "tipo_pendientes",
            AttributeKey::TipoCadena => "tipo_cadena",
            AttributeKey::Cadena => "cadena",
            AttributeKey::SimboloZodiaco => "simbolo_zodiaco",
            AttributeKey::Destinatario => "destinatario",
            AttributeKey::Cierre => "cierre",
            AttributeKey::Material => "material",
            AttributeKey::ColorOro => "color_oro",
        }
    }

    /// The scalar type the sync layer declares for this key
    pub fn value_type(&self) -> ValueType {
        match self {
            AttributeKey::Alto
            | AttributeKey::Ancho
            | AttributeKey::Grosor
            | AttributeKey::Largo
            | AttributeKey::Diametro
            | AttributeKey::KilatesDiamante
            | AttributeKey::Peso => ValueType::Decimal,
            _ => ValueType::Text,
        }
    }
}

impl std::fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
