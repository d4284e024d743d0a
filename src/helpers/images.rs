//! Image markup helpers.
//!
//! Every image is published at two resolutions: `name.ext` for standard
//! displays and `name@2x.ext` for retina displays. These helpers build `<img>`
//! tags that let the browser pick between them through `srcset`.

use crate::sanitize::escape_attr;

/// Number of distinct stand-in images shown while lazy images load.
const STANDIN_COUNT: usize = 5;

/// Returns the retina (`@2x`) variant of an image path.
///
/// Paths without a file extension are returned unchanged.
pub fn to_2x(path: &str) -> String {
    let file_start = path.rfind('/').map_or(0, |i| i + 1);

    match path[file_start..].rfind('.') {
        Some(dot) if dot > 0 => {
            let (stem, ext) = path.split_at(file_start + dot);
            format!("{}@2x{}", stem, ext)
        }
        _ => path.to_string(),
    }
}

/// Builds an `<img>` tag offering the standard and retina variants of `path`.
pub fn retina_image(path: &str) -> String {
    format!(
        r#"<img src="{0}" srcset="{1} 2x, {0} 1x">"#,
        path,
        to_2x(path)
    )
}

/// Like [`retina_image`], with a `title` attribute.
pub fn retina_image_title(path: &str, title: &str) -> String {
    format!(
        r#"<img src="{0}" srcset="{1} 2x, {0} 1x" title="{2}">"#,
        path,
        to_2x(path),
        escape_attr(title)
    )
}

/// Builds a lazily loaded `<img>` tag for a photograph.
///
/// The tag initially shows one of the stand-in images, picked by `index`, and
/// points `data-src`/`data-srcset` at `{dir}{slug}_large.jpg` and its retina
/// variant for the lazy loader to swap in.
pub fn lazy_retina_image(index: usize, dir: &str, slug: &str) -> String {
    lazy_image_tag(index, dir, slug, false, false)
}

/// Like [`lazy_retina_image`], and clicking the image opens the retina
/// variant in a lightbox. Portrait photographs get a portrait stand-in.
pub fn lazy_retina_image_lightbox(index: usize, dir: &str, slug: &str, portrait: bool) -> String {
    lazy_image_tag(index, dir, slug, portrait, true)
}

fn lazy_image_tag(index: usize, dir: &str, slug: &str, portrait: bool, lightbox: bool) -> String {
    let large = format!("{}{}_large.jpg", dir, slug);
    let large_2x = to_2x(&large);
    let orientation = if portrait { "portrait_" } else { "" };

    let mut tag = format!(
        r#"<img class="lazy" src="/assets/images/standin_{}{:02}.jpg" data-src="{}" data-srcset="{} 2x, {} 1x""#,
        orientation,
        index % STANDIN_COUNT,
        large,
        large_2x,
        large
    );
    if lightbox {
        tag.push_str(&format!(
            r#" onclick="lightboxFor('{}');" style="cursor: pointer;""#,
            large_2x
        ));
    }
    tag.push('>');
    tag
}
