//! Graph composition, turns graph options into a layered drawing
//!
//! Layering of the resulting drawing:
//! ```text
//! svg
//! ├── defs
//! │   ├── linearGradient#gradient-{id}  (top color 20%, bottom color 80%, rotate(90))
//! │   └── mask#graphline-{id}
//! │       └── polyline                  (flipped so that y = 0 is the bottom edge)
//! └── g                                 (translate(0,2))
//!     └── rect                          (y = -2, fill: gradient, mask: graphline)
//! ```
use crate::{
    sampler, Color, Drawing, GradLinear, GraphOptions, Mask, Polyline, Rect, RenderTarget, Scene,
    TransformList,
};
use rand::Rng;
use std::fmt;

/// Default length of the drawing identifier
pub const ID_LENGTH: usize = 6;

/// Symbols used to generate drawing identifiers
pub const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Width of the polyline stroke which defines visible area of the mask
pub const STROKE_WIDTH: f64 = 2.0;

/// Vertical margin so the stroke is not clipped at the top and bottom edges,
/// rectangle is moved up by this amount and its group is moved down by it.
pub const STROKE_MARGIN: f64 = 2.0;

/// Generate random identifier of `length` symbols from [`ID_ALPHABET`]
///
/// Symbols are sampled uniformly with replacement, there is no uniqueness guarantee
/// between calls.
pub fn make_id(length: usize, rng: &mut impl Rng) -> String {
    (0..length)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Compose graph drawing from the options
///
/// Caller supplied `points` are used verbatim, otherwise points are sampled with
/// `rng`. Colors and dimensions are not validated and passed to the drawing as is.
pub fn compose(options: &GraphOptions, rng: &mut impl Rng) -> Result<Drawing, GraphError> {
    let span = tracing::debug_span!(
        "[compose]",
        width = options.width,
        height = options.height,
        modulo = options.modulo
    );
    let _guard = span.enter();

    let id = make_id(ID_LENGTH, rng);
    let points = if options.points.is_empty() {
        sampler::sample(options.width, options.height, options.modulo, rng)?.to_string()
    } else {
        options.points.clone()
    };
    tracing::debug!(%id, points = points.as_str(), "[compose:points]");

    let drawing = compose_with_points(&id, points, options);
    Ok(drawing)
}

/// Compose drawing with already resolved identifier and points
fn compose_with_points(id: &str, points: String, options: &GraphOptions) -> Drawing {
    let GraphOptions {
        width,
        height,
        top_color,
        bottom_color,
        ..
    } = options;

    let gradient = GradLinear::vertical(
        format!("gradient-{}", id),
        top_color.clone(),
        bottom_color.clone(),
    );

    // data y is a height above the baseline, flip it so y = 0 is the bottom edge
    let polyline = Polyline {
        points,
        transform: TransformList::new()
            .translate(0.0, *height as f64)
            .scale(1.0, -1.0),
        fill: Color::new("transparent"),
        // white stroke is fully visible area of the mask
        stroke: Color::new("white"),
        stroke_width: STROKE_WIDTH,
    };

    let mask = Mask {
        id: format!("graphline-{}", id),
        x: 0.0,
        y: 0.0,
        width: *width,
        height: *height,
        children: vec![Scene::polyline(polyline)],
    };

    let rect = Rect {
        x: 0.0,
        y: -STROKE_MARGIN,
        width: *width,
        height: *height,
        fill: gradient.url(),
        mask: Some(mask.url()),
    };

    let root = Scene::svg(
        *width,
        *height,
        vec![
            Scene::defs(vec![Scene::linear_gradient(gradient), Scene::mask(mask)]),
            Scene::group(
                TransformList::new().translate(0.0, STROKE_MARGIN),
                vec![Scene::rect(rect)],
            ),
        ],
    );
    Drawing::new(id, root)
}

/// Compose graph drawing using thread local random number generator
pub fn generate_graph(options: &GraphOptions) -> Result<Drawing, GraphError> {
    compose(options, &mut rand::thread_rng())
}

/// Compose graph drawing and attach it to the rendering target
///
/// Nothing is attached if composition fails.
pub fn generate_into<T: RenderTarget + ?Sized>(
    target: &mut T,
    options: &GraphOptions,
    rng: &mut impl Rng,
) -> Result<(), GraphError> {
    let drawing = compose(options, rng)?;
    target.attach(drawing);
    Ok(())
}

/// Error produced by graph generation
#[derive(Debug)]
pub enum GraphError {
    /// Argument has a value outside of its domain
    InvalidArgument { name: &'static str, value: i64 },
    /// Failed to decode graph options
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
    /// IO error while reading options or writing drawing
    Io(std::io::Error),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidArgument { name, value } => {
                write!(f, "invalid argument {}: {} (expected positive value)", name, value)
            }
            #[cfg(feature = "serde")]
            GraphError::Json(error) => write!(f, "invalid graph options: {}", error),
            GraphError::Io(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphError::InvalidArgument { .. } => None,
            #[cfg(feature = "serde")]
            GraphError::Json(error) => Some(error),
            GraphError::Io(error) => Some(error),
        }
    }
}

impl From<std::io::Error> for GraphError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for GraphError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SceneInner, SvgDocument};
    use rand::{rngs::StdRng, SeedableRng};

    type Error = Box<dyn std::error::Error>;

    /// Split `"x,y "` encoded points into coordinate pairs
    fn split_points(points: &str) -> Result<Vec<(i64, i64)>, Error> {
        let mut pairs: Vec<(i64, i64)> = Vec::new();
        for pair in points.split(' ').filter(|pair| !pair.is_empty()) {
            let (x, y) = pair.split_once(',').ok_or("point without comma")?;
            pairs.push((x.parse::<i64>()?, y.parse::<i64>()?));
        }
        Ok(pairs)
    }

    fn month_points() -> String {
        "0,10 3,40 6,90 9,20 12,35 15,70 18,55 21,15 24,80 27,60 ".to_string()
    }

    #[test]
    fn test_make_id() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in [0, 1, 6, 32] {
            let id = make_id(length, &mut rng);
            assert_eq!(id.len(), length);
            assert!(id.bytes().all(|b| b.is_ascii_alphanumeric()));
        }
        assert_eq!(ID_ALPHABET.len(), 62);
    }

    #[test]
    fn test_make_id_uses_alphabet() {
        // all symbols show up given enough draws
        let mut rng = StdRng::seed_from_u64(2);
        let id = make_id(10_000, &mut rng);
        for symbol in ID_ALPHABET {
            assert!(id.as_bytes().contains(symbol), "missing {}", *symbol as char);
        }
    }

    #[test]
    fn test_default_scenario() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(3);
        let options = GraphOptions::default().with_points(month_points());
        let drawing = compose(&options, &mut rng)?;

        assert_eq!(drawing.id().len(), ID_LENGTH);
        assert_eq!(drawing.size(), Some((30, 90)));

        let grad = drawing.gradient().ok_or("gradient is missing")?;
        assert_eq!(grad.id, format!("gradient-{}", drawing.id()));
        assert_eq!(grad.transform.to_string(), "rotate(90)");
        let stops: Vec<_> = grad
            .stops
            .iter()
            .map(|s| (s.offset_percent().to_string(), s.color.to_string()))
            .collect();
        assert_eq!(
            stops,
            vec![
                ("20%".to_string(), "gold".to_string()),
                ("80%".to_string(), "red".to_string())
            ]
        );

        let mask = drawing.mask().ok_or("mask is missing")?;
        assert_eq!(mask.id, format!("graphline-{}", drawing.id()));
        assert_eq!((mask.x, mask.y, mask.width, mask.height), (0.0, 0.0, 30, 90));

        let polyline = drawing.polyline().ok_or("polyline is missing")?;
        assert_eq!(polyline.points, month_points());
        assert_eq!(polyline.transform.to_string(), "translate(0,90) scale(1,-1)");
        assert_eq!(polyline.stroke_width, 2.0);
        assert_eq!(polyline.stroke.as_str(), "white");
        assert_eq!(polyline.fill.as_str(), "transparent");

        let rect = drawing.rect().ok_or("rect is missing")?;
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (0.0, -2.0, 30, 90));
        assert_eq!(rect.fill, format!("url(#gradient-{})", drawing.id()));
        assert_eq!(rect.mask, Some(format!("url(#graphline-{})", drawing.id())));

        let group = drawing.group_transform().ok_or("group is missing")?;
        assert_eq!(group.to_string(), "translate(0,2)");
        Ok(())
    }

    #[test]
    fn test_layering() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(4);
        let drawing = compose(&GraphOptions::default(), &mut rng)?;
        let root = drawing.root();

        let children = root.children();
        assert_eq!(children.len(), 2);
        assert!(matches!(children[0].as_ref(), SceneInner::Defs { .. }));
        assert!(matches!(children[1].as_ref(), SceneInner::Group { .. }));

        let defs = children[0].children();
        assert!(matches!(defs[0].as_ref(), SceneInner::LinearGradient(_)));
        assert!(matches!(defs[1].as_ref(), SceneInner::Mask(_)));
        assert!(matches!(
            defs[1].children()[0].as_ref(),
            SceneInner::Polyline(_)
        ));

        assert!(root.references_resolved());
        assert!(root.find(&format!("gradient-{}", drawing.id())).is_some());
        assert!(root.find(&format!("graphline-{}", drawing.id())).is_some());
        Ok(())
    }

    #[test]
    fn test_verbatim_points() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(5);
        let options = GraphOptions::default().with_points("0,10 3,20 6,5 ");
        let drawing = compose(&options, &mut rng)?;
        assert_eq!(
            drawing.polyline().map(|p| p.points.as_str()),
            Some("0,10 3,20 6,5 ")
        );
        let svg = drawing.to_svg();
        assert!(svg.contains(r#"points="0,10 3,20 6,5 ""#));
        Ok(())
    }

    #[test]
    fn test_same_points_same_structure() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(6);
        let options = GraphOptions::default().with_points(month_points());
        let first = compose(&options, &mut rng)?;
        let second = compose(&options, &mut rng)?;
        assert_ne!(first.id(), second.id());

        // identical up to the identifier
        let first_svg = first.to_svg().replace(first.id(), "ID");
        let second_svg = second.to_svg().replace(second.id(), "ID");
        assert_eq!(first_svg, second_svg);

        let rebuilt = compose_with_points(first.id(), month_points(), &options);
        assert_eq!(rebuilt, first);
        Ok(())
    }

    #[test]
    fn test_sampled_points() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(7);
        let options = GraphOptions::default().with_width(90).with_height(40);
        let drawing = compose(&options, &mut rng)?;
        let polyline = drawing.polyline().ok_or("polyline is missing")?;
        assert!(polyline.points.ends_with(' '));

        let points = split_points(&polyline.points)?;
        assert_eq!(points.len(), 30);
        for (index, (x, y)) in points.into_iter().enumerate() {
            assert_eq!(x, index as i64 * 3);
            assert!((1..=40).contains(&y));
        }

        // flipped: baseline maps to the bottom edge, full height to the top edge
        let tr = polyline.transform.matrix();
        assert_eq!(tr.apply([0.0, 0.0]), [0.0, 40.0]);
        assert_eq!(tr.apply([0.0, 40.0]), [0.0, 0.0]);
        Ok(())
    }

    #[test]
    fn test_invalid_modulo() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(8);
        let options = GraphOptions::default().with_modulo(0);
        assert!(matches!(
            compose(&options, &mut rng),
            Err(GraphError::InvalidArgument { name: "modulo", value: 0 })
        ));

        // sampler is not consulted when points are provided
        let options = options.with_points("0,1 ");
        assert!(compose(&options, &mut rng).is_ok());
        Ok(())
    }

    #[test]
    fn test_degenerate_dimensions() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(9);
        let options = GraphOptions::default().with_width(0).with_height(-5);
        let drawing = compose(&options, &mut rng)?;
        assert_eq!(drawing.size(), Some((0, -5)));
        assert_eq!(drawing.polyline().map(|p| p.points.as_str()), Some(""));
        Ok(())
    }

    #[test]
    fn test_colors_passthrough() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(10);
        let options = GraphOptions::default()
            .with_top_color("#00ff00")
            .with_bottom_color("definitely not a color");
        let svg = compose(&options, &mut rng)?.to_svg();
        assert!(svg.contains("stop-color=\"#00ff00\""));
        assert!(svg.contains("stop-color=\"definitely not a color\""));
        Ok(())
    }

    #[test]
    fn test_generate_into() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(11);
        let mut document = SvgDocument::new();
        generate_into(&mut document, &GraphOptions::default(), &mut rng)?;
        generate_into(&mut document, &GraphOptions::default(), &mut rng)?;
        assert_eq!(document.drawings().len(), 2);

        let result = generate_into(
            &mut document,
            &GraphOptions::default().with_modulo(-1),
            &mut rng,
        );
        assert!(result.is_err());
        assert_eq!(document.drawings().len(), 2);
        Ok(())
    }

    #[test]
    fn test_generate_graph() -> Result<(), Error> {
        let drawing = generate_graph(&GraphOptions::default())?;
        assert_eq!(drawing.id().len(), ID_LENGTH);
        let polyline = drawing.polyline().ok_or("polyline is missing")?;
        assert_eq!(split_points(&polyline.points)?.len(), 10);
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_tree() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(12);
        let options = GraphOptions::default().with_points(month_points());
        let drawing = compose(&options, &mut rng)?;
        let json = serde_json::to_value(&drawing)?;

        assert_eq!(json["id"], drawing.id());
        let root = &json["root"];
        assert_eq!(root["type"], "svg");
        assert_eq!((root["width"].as_i64(), root["height"].as_i64()), (Some(30), Some(90)));

        let defs = &root["children"][0];
        assert_eq!(defs["type"], "defs");
        assert_eq!(defs["children"][0]["type"], "linear_gradient");
        assert_eq!(defs["children"][0]["stops"][1]["color"], "red");

        let mask = &defs["children"][1];
        assert_eq!(mask["type"], "mask");
        let polyline = &mask["children"][0];
        assert_eq!(polyline["type"], "polyline");
        assert_eq!(polyline["points"], month_points().as_str());

        let group = &root["children"][1];
        assert_eq!(group["type"], "group");
        assert_eq!(group["children"][0]["type"], "rect");
        assert_eq!(group["children"][0]["y"].as_f64(), Some(-2.0));
        Ok(())
    }

    #[test]
    fn test_error_display() {
        let error = GraphError::InvalidArgument {
            name: "modulo",
            value: 0,
        };
        assert_eq!(
            error.to_string(),
            "invalid argument modulo: 0 (expected positive value)"
        );
    }
}
