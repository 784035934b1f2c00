//! SVG markup generation
//!
//! See [SVG Specification](https://www.w3.org/TR/SVG11/)
use crate::{
    utils::xml_escape, Drawing, GradLinear, GraphError, Mask, Polyline, Rect, ScalarFmt, Scene,
    SceneInner,
};
use std::{fmt, io::Write};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

struct Indent(usize);

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            f.write_str("  ")?;
        }
        Ok(())
    }
}

fn write_children(f: &mut fmt::Formatter<'_>, children: &[Scene], depth: usize) -> fmt::Result {
    for child in children {
        write_scene(f, child, depth)?;
    }
    Ok(())
}

fn write_gradient(f: &mut fmt::Formatter<'_>, grad: &GradLinear, depth: usize) -> fmt::Result {
    write!(f, "{}<linearGradient id=\"{}\"", Indent(depth), xml_escape(&grad.id))?;
    if !grad.transform.is_empty() {
        write!(f, " gradientTransform=\"{}\"", grad.transform)?;
    }
    writeln!(f, ">")?;
    for stop in grad.stops.iter() {
        writeln!(
            f,
            "{}<stop offset=\"{}\" stop-color=\"{}\"/>",
            Indent(depth + 1),
            stop.offset_percent(),
            xml_escape(stop.color.as_str()),
        )?;
    }
    writeln!(f, "{}</linearGradient>", Indent(depth))
}

fn write_mask(f: &mut fmt::Formatter<'_>, mask: &Mask, depth: usize) -> fmt::Result {
    writeln!(
        f,
        "{}<mask id=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\">",
        Indent(depth),
        xml_escape(&mask.id),
        ScalarFmt(mask.x),
        ScalarFmt(mask.y),
        mask.width,
        mask.height,
    )?;
    write_children(f, &mask.children, depth + 1)?;
    writeln!(f, "{}</mask>", Indent(depth))
}

fn write_rect(f: &mut fmt::Formatter<'_>, rect: &Rect, depth: usize) -> fmt::Result {
    write!(
        f,
        "{}<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" style=\"stroke:none;",
        Indent(depth),
        ScalarFmt(rect.x),
        ScalarFmt(rect.y),
        rect.width,
        rect.height,
    )?;
    if let Some(mask) = &rect.mask {
        write!(f, "mask:{};", xml_escape(mask))?;
    }
    writeln!(f, "fill:{}\"/>", xml_escape(&rect.fill))
}

fn write_polyline(f: &mut fmt::Formatter<'_>, polyline: &Polyline, depth: usize) -> fmt::Result {
    write!(f, "{}<polyline", Indent(depth))?;
    if !polyline.transform.is_empty() {
        write!(f, " transform=\"{}\"", polyline.transform)?;
    }
    writeln!(
        f,
        " points=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
        xml_escape(&polyline.points),
        xml_escape(polyline.fill.as_str()),
        xml_escape(polyline.stroke.as_str()),
        ScalarFmt(polyline.stroke_width),
    )
}

fn write_scene(f: &mut fmt::Formatter<'_>, scene: &Scene, depth: usize) -> fmt::Result {
    match scene.as_ref() {
        SceneInner::Svg {
            width,
            height,
            children,
        } => {
            writeln!(
                f,
                "{}<svg xmlns=\"{}\" width=\"{}\" height=\"{}\">",
                Indent(depth),
                SVG_NAMESPACE,
                width,
                height
            )?;
            write_children(f, children, depth + 1)?;
            writeln!(f, "{}</svg>", Indent(depth))
        }
        SceneInner::Defs { children } => {
            writeln!(f, "{}<defs>", Indent(depth))?;
            write_children(f, children, depth + 1)?;
            writeln!(f, "{}</defs>", Indent(depth))
        }
        SceneInner::LinearGradient(grad) => write_gradient(f, grad, depth),
        SceneInner::Mask(mask) => write_mask(f, mask, depth),
        SceneInner::Group {
            transform,
            children,
        } => {
            write!(f, "{}<g", Indent(depth))?;
            if !transform.is_empty() {
                write!(f, " transform=\"{}\"", transform)?;
            }
            writeln!(f, ">")?;
            write_children(f, children, depth + 1)?;
            writeln!(f, "{}</g>", Indent(depth))
        }
        SceneInner::Rect(rect) => write_rect(f, rect, depth),
        SceneInner::Polyline(polyline) => write_polyline(f, polyline, depth),
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scene(f, self, 0)
    }
}

impl fmt::Display for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scene(f, self.root(), 0)
    }
}

impl Drawing {
    /// Save drawing as SVG markup
    pub fn save(&self, mut out: impl Write) -> Result<(), GraphError> {
        write!(&mut out, "{}", self)?;
        Ok(())
    }

    /// Convert drawing to SVG markup
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}
