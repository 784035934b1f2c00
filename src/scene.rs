//! Drawing descriptor, a tree of vector primitives handed to a rendering target
use crate::{Color, GradLinear, Scalar, TransformList};
use std::{fmt, sync::Arc};

/// Open polyline, `points` are kept in the SVG `points` attribute format
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Polyline {
    pub points: String,
    pub transform: TransformList,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: Scalar,
}

/// Mask region, visible area is defined by its children
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Mask {
    pub id: String,
    pub x: Scalar,
    pub y: Scalar,
    pub width: i64,
    pub height: i64,
    pub children: Vec<Scene>,
}

impl Mask {
    /// Mask reference usable in the `mask` property
    pub fn url(&self) -> String {
        format!("url(#{})", self.id)
    }
}

/// Rectangle filled with a paint reference and optionally masked
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rect {
    pub x: Scalar,
    pub y: Scalar,
    pub width: i64,
    pub height: i64,
    /// Fill paint, `url(#..)` reference or a plain color
    pub fill: String,
    /// `url(#..)` reference to the mask
    pub mask: Option<String>,
}

#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum SceneInner {
    /// Root of the drawing
    Svg {
        width: i64,
        height: i64,
        children: Vec<Scene>,
    },
    /// Definitions, never rendered directly, only referenced by id
    Defs { children: Vec<Scene> },
    LinearGradient(GradLinear),
    Mask(Mask),
    Group {
        transform: TransformList,
        children: Vec<Scene>,
    },
    Rect(Rect),
    Polyline(Polyline),
}

/// Immutable, cheaply clonable node of the drawing tree
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Scene {
    inner: Arc<SceneInner>,
}

impl AsRef<SceneInner> for Scene {
    fn as_ref(&self) -> &SceneInner {
        self.inner.as_ref()
    }
}

impl From<SceneInner> for Scene {
    fn from(inner: SceneInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl Scene {
    pub fn svg(width: i64, height: i64, children: Vec<Scene>) -> Self {
        SceneInner::Svg {
            width,
            height,
            children,
        }
        .into()
    }

    pub fn defs(children: Vec<Scene>) -> Self {
        SceneInner::Defs { children }.into()
    }

    pub fn linear_gradient(grad: GradLinear) -> Self {
        SceneInner::LinearGradient(grad).into()
    }

    pub fn mask(mask: Mask) -> Self {
        SceneInner::Mask(mask).into()
    }

    pub fn group(transform: TransformList, children: Vec<Scene>) -> Self {
        SceneInner::Group {
            transform,
            children,
        }
        .into()
    }

    pub fn rect(rect: Rect) -> Self {
        SceneInner::Rect(rect).into()
    }

    pub fn polyline(polyline: Polyline) -> Self {
        SceneInner::Polyline(polyline).into()
    }

    /// Direct children of the node
    pub fn children(&self) -> &[Scene] {
        match self.as_ref() {
            SceneInner::Svg { children, .. }
            | SceneInner::Defs { children }
            | SceneInner::Group { children, .. } => children.as_slice(),
            SceneInner::Mask(mask) => mask.children.as_slice(),
            SceneInner::LinearGradient(_) | SceneInner::Rect(_) | SceneInner::Polyline(_) => &[],
        }
    }

    /// Identifier of the node if it can be referenced
    pub fn id(&self) -> Option<&str> {
        match self.as_ref() {
            SceneInner::LinearGradient(grad) => Some(&grad.id),
            SceneInner::Mask(mask) => Some(&mask.id),
            _ => None,
        }
    }

    /// Identifiers referenced by this node (not including its children)
    pub fn references(&self) -> Vec<&str> {
        match self.as_ref() {
            SceneInner::Rect(rect) => std::iter::once(rect.fill.as_str())
                .chain(rect.mask.as_deref())
                .filter_map(url_id)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Visit all nodes in document order (pre-order, depth first)
    pub fn visit<'a>(&'a self, visitor: &mut impl FnMut(&'a Scene)) {
        visitor(self);
        for child in self.children() {
            child.visit(visitor);
        }
    }

    /// Find node with the specified identifier
    pub fn find(&self, id: &str) -> Option<&Scene> {
        let mut found = None;
        self.visit(&mut |scene| {
            if found.is_none() && scene.id() == Some(id) {
                found = Some(scene);
            }
        });
        found
    }

    /// Find first node for which `pred` returns a value
    pub fn find_map<'a, T>(&'a self, mut pred: impl FnMut(&'a SceneInner) -> Option<T>) -> Option<T> {
        let mut found = None;
        self.visit(&mut |scene| {
            if found.is_none() {
                found = pred(scene.as_ref());
            }
        });
        found
    }

    /// Check that every `url(#id)` reference points to a node defined earlier
    /// in document order
    pub fn references_resolved(&self) -> bool {
        let mut defined = Vec::new();
        let mut resolved = true;
        self.visit(&mut |scene| {
            resolved &= scene.references().iter().all(|id| defined.contains(id));
            if let Some(id) = scene.id() {
                defined.push(id);
            }
        });
        resolved
    }
}

/// Extract identifier from `url(#id)` reference
fn url_id(reference: &str) -> Option<&str> {
    reference.strip_prefix("url(#")?.strip_suffix(')')
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

/// Composed graph drawing
///
/// Identifier `id` namespaces gradient and mask ids, so multiple drawings can be
/// attached to the same rendering target. Uniqueness is not guaranteed, only
/// likely (62^6 possible identifiers with default length).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Drawing {
    id: String,
    root: Scene,
}

impl Drawing {
    pub fn new(id: impl Into<String>, root: Scene) -> Self {
        Self {
            id: id.into(),
            root,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn root(&self) -> &Scene {
        &self.root
    }

    /// Width and height of the drawing area
    pub fn size(&self) -> Option<(i64, i64)> {
        match self.root.as_ref() {
            SceneInner::Svg { width, height, .. } => Some((*width, *height)),
            _ => None,
        }
    }

    pub fn gradient(&self) -> Option<&GradLinear> {
        self.root.find_map(|inner| match inner {
            SceneInner::LinearGradient(grad) => Some(grad),
            _ => None,
        })
    }

    pub fn mask(&self) -> Option<&Mask> {
        self.root.find_map(|inner| match inner {
            SceneInner::Mask(mask) => Some(mask),
            _ => None,
        })
    }

    pub fn polyline(&self) -> Option<&Polyline> {
        self.root.find_map(|inner| match inner {
            SceneInner::Polyline(polyline) => Some(polyline),
            _ => None,
        })
    }

    pub fn rect(&self) -> Option<&Rect> {
        self.root.find_map(|inner| match inner {
            SceneInner::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    /// Transform of the group wrapping the filled rectangle
    pub fn group_transform(&self) -> Option<&TransformList> {
        self.root.find_map(|inner| match inner {
            SceneInner::Group { transform, .. } => Some(transform),
            _ => None,
        })
    }

    /// All identifiers defined by the drawing
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.root.visit(&mut |scene| ids.extend(scene.id()));
        ids
    }
}
