//! Decorative shape and letter-initial classification
//!
//! Longest-match lookup over the shape dictionary: every variant that
//! occurs anywhere in the combined description+title is collected and the
//! shape with the longest matched variant wins, so "estrella de david"
//! beats "estrella". Ties go to the earliest declared entry.
//!
//! Applicable types always receive their `forma_*` key; `"Sin definir"`
//! marks a piece whose shape the description never names. Because the
//! orchestrator merges this classifier last, that value — default
//! included — overwrites a figure-derived `forma_colgante`.

use joyero_domain::{AttributeKey, AttributeMap, ProductType};

use crate::normalizer::normalize;

/// Value emitted when no dictionary entry matches
pub const UNDEFINED_SHAPE: &str = "Sin definir";

/// Tokens scanned after a "letra"/"inicial" trigger before giving up
const LETTER_SCAN_WINDOW: usize = 3;

struct ShapeEntry {
    display: &'static str,
    variants: &'static [&'static str],
}

macro_rules! shape {
    ($display:literal, $($variant:literal),+ $(,)?) => {
        ShapeEntry { display: $display, variants: &[$($variant),+] }
    };
}

/// The shape dictionary. Variants are normalized surface forms; entry
/// order only breaks exact-length ties.
static SHAPES: &[ShapeEntry] = &[
    // Symbols and geometry
    shape!("Estrella De David", "estrella de david"),
    shape!("Estrella De Mar", "estrella de mar", "estrellas de mar"),
    shape!("Estrella Fugaz", "estrella fugaz"),
    shape!("Estrella", "estrella", "estrellas", "estrellita"),
    shape!("Cruz De Caravaca", "cruz de caravaca", "caravaca"),
    shape!("Cruz", "cruz", "cruces", "crucecita"),
    shape!("Corazon", "corazon", "corazones", "corazoncito"),
    shape!("Infinito", "infinito", "infinitos", "infinity"),
    shape!("Circulo", "circulo", "circulos", "redondo", "redonda"),
    shape!("Rombo", "rombo", "rombos"),
    shape!("Cuadrado", "cuadrado", "cuadrada", "cuadrados"),
    shape!("Rectangulo", "rectangulo", "rectangular"),
    shape!("Triangulo", "triangulo", "triangular"),
    shape!("Ovalo", "ovalo", "ovalado", "ovalada", "oval"),
    shape!("Gota", "gota", "gotas"),
    shape!("Lagrima", "lagrima", "lagrimas"),
    shape!("Barra", "barra", "barras"),
    shape!("Bola", "bola", "bolas", "bolita", "bolitas"),
    shape!("Chapa", "chapa", "chapas"),
    shape!("Placa", "placa", "placas"),
    shape!("Medallon", "medallon", "medallones"),
    shape!("Camafeo", "camafeo", "camafeos"),
    shape!("Escudo", "escudo", "escudos"),
    shape!("Moneda", "moneda", "monedas"),
    shape!("Lingote", "lingote", "lingotes"),
    shape!("Nudo", "nudo", "nudos", "nudo marinero"),
    shape!("Lazo", "lazo", "lazos"),
    shape!("Flecha", "flecha", "flechas"),
    shape!("Espada", "espada", "espadas"),
    shape!("Llave", "llave", "llaves"),
    shape!("Candado", "candado", "candados"),
    shape!("Corona", "corona", "coronas", "coronita"),
    shape!("Calavera", "calavera", "calaveras"),
    shape!("Labios", "labios"),
    shape!("Mano De Fatima", "mano de fatima", "hamsa", "jamsa"),
    shape!("Ojo De Horus", "ojo de horus"),
    shape!("Ojo Turco", "ojo turco", "ojos turcos"),
    shape!("Mano", "mano", "manos", "manita"),
    shape!("Huella", "huella", "huellas"),
    shape!("Alas", "alas", "ala de angel"),
    shape!("Puzzle", "puzzle", "puzle"),
    shape!("Dado", "dado", "dados"),
    // Nature
    shape!("Flor De Lis", "flor de lis", "flor de lys"),
    shape!("Flor", "flor", "flores", "florecita"),
    shape!("Margarita", "margarita", "margaritas"),
    shape!("Rosa De Los Vientos", "rosa de los vientos"),
    shape!("Rosa", "rosa", "rosas"),
    shape!("Trebol De Cuatro Hojas", "trebol de cuatro hojas", "cuatro hojas"),
    shape!("Trebol", "trebol", "treboles"),
    shape!("Hoja", "hoja", "hojas"),
    shape!("Arbol De La Vida", "arbol de la vida"),
    shape!("Arbol", "arbol", "arboles"),
    shape!("Palmera", "palmera", "palmeras"),
    shape!("Cactus", "cactus"),
    shape!("Seta", "seta", "setas"),
    shape!("Media Luna", "media luna"),
    shape!("Luna", "luna", "lunita"),
    shape!("Sol", "sol", "soles"),
    shape!("Rayo", "rayo", "rayos"),
    shape!("Nube", "nube", "nubes"),
    shape!("Arcoiris", "arcoiris", "arco iris"),
    shape!("Copo De Nieve", "copo de nieve", "copos de nieve"),
    shape!("Cometa", "cometa", "cometas"),
    shape!("Planeta", "planeta", "planetas", "saturno"),
    shape!("Concha", "concha", "conchas"),
    shape!("Caracola", "caracola", "caracolas"),
    shape!("Caracol", "caracol", "caracoles"),
    shape!("Cereza", "cereza", "cerezas"),
    shape!("Fresa", "fresa", "fresas"),
    shape!("Pina", "pina", "pinas"),
    shape!("Manzana", "manzana", "manzanas"),
    shape!("Granada", "granada", "granadas"),
    shape!("Racimo", "racimo", "racimos"),
    // Animals
    shape!("Caballito De Mar", "caballito de mar", "caballitos de mar"),
    shape!("Caballo", "caballo", "caballos"),
    shape!("Mariposa", "mariposa", "mariposas"),
    shape!("Libelula", "libelula", "libelulas"),
    shape!("Buho", "buho", "buhos", "lechuza"),
    shape!("Elefante", "elefante", "elefantes", "elefantito"),
    shape!("Delfin", "delfin", "delfines"),
    shape!("Tortuga", "tortuga", "tortugas"),
    shape!("Gato", "gato", "gatos", "gatito"),
    shape!("Perro", "perro", "perros", "perrito"),
    shape!("Osito", "osito", "ositos"),
    shape!("Serpiente", "serpiente", "serpientes"),
    shape!("Pez", "pez", "peces", "pececito"),
    shape!("Pajaro", "pajaro", "pajaros", "pajarito"),
    shape!("Golondrina", "golondrina", "golondrinas"),
    shape!("Paloma", "paloma", "palomas"),
    shape!("Abeja", "abeja", "abejas", "abejita"),
    shape!("Mariquita", "mariquita", "mariquitas"),
    shape!("Rana", "rana", "ranas", "ranita"),
    shape!("Leon", "leon", "leones"),
    shape!("Lobo", "lobo", "lobos"),
    shape!("Aguila", "aguila", "aguilas"),
    shape!("Dragon", "dragon", "dragones"),
    shape!("Unicornio", "unicornio", "unicornios"),
    shape!("Lagarto", "lagarto", "lagartija"),
    shape!("Cocodrilo", "cocodrilo"),
    shape!("Jirafa", "jirafa", "jirafas"),
    shape!("Mono", "mono", "monos"),
    shape!("Koala", "koala"),
    shape!("Panda", "panda"),
    shape!("Pinguino", "pinguino", "pinguinos"),
    shape!("Ballena", "ballena", "ballenas"),
    shape!("Pulpo", "pulpo", "pulpos"),
    shape!("Cangrejo", "cangrejo", "cangrejos"),
    // Figures and fantasy
    shape!("Angel", "angel", "angeles", "angelito", "angelitos"),
    shape!("Buda", "buda", "budas"),
    shape!("Sirena", "sirena", "sirenas"),
    shape!("Hada", "hada", "hadas", "hadita"),
    shape!("Duende", "duende", "duendes"),
    shape!("Cupido", "cupido"),
    shape!("Payaso", "payaso", "payasos"),
    shape!("Arlequin", "arlequin", "arlequines"),
    shape!("Bailarina", "bailarina", "bailarinas"),
    shape!("Muneca", "muneca", "munecas", "muneco"),
    // Maritime and travel
    shape!("Ancla", "ancla", "anclas"),
    shape!("Timon", "timon", "timones"),
    shape!("Barco", "barco", "barcos", "velero"),
    shape!("Faro", "faro", "faros"),
    shape!("Brujula", "brujula", "brujulas"),
    shape!("Bola Del Mundo", "bola del mundo", "mundo"),
    shape!("Avion", "avion", "aviones"),
    shape!("Coche", "coche", "coches"),
    shape!("Bicicleta", "bicicleta", "bicicletas"),
    shape!("Molino", "molino", "molinos"),
    shape!("Castillo", "castillo", "castillos"),
    shape!("Casita", "casita"),
    shape!("Torre", "torre", "torres"),
    // Music, sport and objects
    shape!("Clave De Sol", "clave de sol"),
    shape!("Nota Musical", "nota musical", "notas musicales"),
    shape!("Guitarra", "guitarra", "guitarras"),
    shape!("Violin", "violin", "violines"),
    shape!("Piano", "piano", "pianos"),
    shape!("Balon", "balon", "balones", "balon de futbol"),
    shape!("Pelota", "pelota", "pelotas"),
    shape!("Raqueta", "raqueta", "raquetas"),
    shape!("Zapatilla", "zapatilla", "zapatillas"),
    shape!("Copa", "copa", "copas"),
    shape!("Campana", "campana", "campanas", "campanilla"),
    shape!("Pluma", "pluma", "plumas"),
    shape!("Libro", "libro", "libros"),
    shape!("Dedal", "dedal", "dedales"),
    shape!("Tijeras", "tijeras"),
    shape!("Caliz", "caliz"),
    shape!("Mascara", "mascara", "mascaras"),
    shape!("Herradura", "herradura", "herraduras"),
    // Baby motifs
    shape!("Chupete", "chupete", "chupetes"),
    shape!("Biberon", "biberon", "biberones"),
    shape!("Carrito", "carrito", "carritos", "cochecito"),
    shape!("Zapatito", "zapatito", "zapatitos"),
    shape!("Patuco", "patuco", "patucos"),
];

/// Classify the decorative shape and, for pendants, a letter initial
///
/// `title` is the formatted product title; callers without a distinct
/// title pass the description twice. The shape key is always emitted for
/// applicable types (default [`UNDEFINED_SHAPE`]); `letra` only on a
/// successful scan.
pub fn extract_shapes_and_letters(
    description: &str,
    title: &str,
    product_type: ProductType,
) -> AttributeMap {
    let mut map = AttributeMap::new();
    let Some(shape_key) = product_type.shape_key() else {
        return map;
    };

    let description = normalize(description);
    let title = normalize(title);
    if description.is_empty() && title.is_empty() {
        return map;
    }

    let combined = format!("{description} {title}");
    let mut best: Option<(&'static str, usize)> = None;
    for entry in SHAPES {
        for variant in entry.variants {
            if combined.contains(variant) && best.is_none_or(|(_, len)| variant.len() > len) {
                best = Some((entry.display, variant.len()));
            }
        }
    }
    map.insert(shape_key, best.map_or(UNDEFINED_SHAPE, |(display, _)| display));

    if product_type == ProductType::Colgante {
        if let Some(letter) = scan_letter(&title) {
            map.insert(AttributeKey::Letra, letter);
        }
    }

    map
}

/// Scan a normalized title for a letter initial
///
/// A token containing "letra" or "inicial" triggers a scan of up to the
/// next three tokens; the first one that reduces to a single letter wins.
fn scan_letter(title: &str) -> Option<String> {
    let tokens: Vec<&str> = title.split_whitespace().collect();
    for (idx, token) in tokens.iter().enumerate() {
        if !token.contains("letra") && !token.contains("inicial") {
            continue;
        }
        for candidate in tokens.iter().skip(idx + 1).take(LETTER_SCAN_WINDOW) {
            let letters: String = candidate
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .collect();
            if letters.len() == 1 {
                return Some(letters.to_uppercase());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(description: &str, product_type: ProductType) -> AttributeMap {
        extract_shapes_and_letters(description, description, product_type)
    }

    #[test]
    fn test_longest_variant_wins() {
        let map = classify(
            "colgante estrella y estrella de david oro",
            ProductType::Colgante,
        );
        assert_eq!(
            map.get(AttributeKey::FormaColgante),
            Some("Estrella De David")
        );
    }

    #[test]
    fn test_simple_shape() {
        let map = classify("colgante corazon oro 18k", ProductType::Colgante);
        assert_eq!(map.get(AttributeKey::FormaColgante), Some("Corazon"));
    }

    #[test]
    fn test_default_when_no_match() {
        let map = classify("colgante oro liso", ProductType::Colgante);
        assert_eq!(map.get(AttributeKey::FormaColgante), Some(UNDEFINED_SHAPE));
    }

    #[test]
    fn test_key_routed_by_type() {
        let map = classify("pendientes mariposa", ProductType::Pendientes);
        assert_eq!(map.get(AttributeKey::FormaPendientes), Some("Mariposa"));
        assert_eq!(map.get(AttributeKey::FormaColgante), None);

        let map = classify("gargantilla trebol", ProductType::Gargantilla);
        assert_eq!(map.get(AttributeKey::FormaColgante), Some("Trebol"));
    }

    #[test]
    fn test_inapplicable_type_is_silent() {
        let map = classify("sortija corazon", ProductType::Sortija);
        assert!(map.is_empty());
    }

    #[test]
    fn test_empty_description_is_silent() {
        let map = classify("", ProductType::Colgante);
        assert!(map.is_empty());
    }

    #[test]
    fn test_letter_from_title() {
        let map = extract_shapes_and_letters(
            "colgante oro 18k",
            "Colgante letra A oro",
            ProductType::Colgante,
        );
        assert_eq!(map.get(AttributeKey::Letra), Some("A"));
    }

    #[test]
    fn test_letter_trigger_inicial() {
        let map = extract_shapes_and_letters(
            "colgante oro",
            "colgante inicial m. pulida",
            ProductType::Colgante,
        );
        assert_eq!(map.get(AttributeKey::Letra), Some("M"));
    }

    #[test]
    fn test_letter_scan_window_bounded() {
        // The letter sits four tokens after the trigger: out of range.
        let map = extract_shapes_and_letters(
            "colgante oro",
            "colgante letra de oro pulido brillo a",
            ProductType::Colgante,
        );
        assert_eq!(map.get(AttributeKey::Letra), None);
    }

    #[test]
    fn test_letter_only_for_pendants() {
        let map = extract_shapes_and_letters(
            "collar oro",
            "collar letra b",
            ProductType::Collar,
        );
        assert_eq!(map.get(AttributeKey::Letra), None);
    }

    #[test]
    fn test_plural_variant_matches() {
        let map = classify("pendientes estrellas oro", ProductType::Pendientes);
        assert_eq!(map.get(AttributeKey::FormaPendientes), Some("Estrella"));
    }
}
