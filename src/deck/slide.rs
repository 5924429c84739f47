//! One slide: a title placeholder and a picture at a fixed position.

use super::parts::{NS_A, NS_P, NS_R};
use crate::chart::xml_escape;

const EMU_PER_INCH: u64 = 914_400;

/// Picture left edge: 1in.
pub const PICTURE_LEFT_EMU: u64 = EMU_PER_INCH;
/// Picture top edge: 1.5in.
pub const PICTURE_TOP_EMU: u64 = EMU_PER_INCH * 3 / 2;
/// Picture display height: 4.5in.
pub const PICTURE_HEIGHT_EMU: u64 = EMU_PER_INCH * 9 / 2;

/// Placed picture extent in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictureExtent {
    pub width: u64,
    pub height: u64,
}

impl PictureExtent {
    /// Fixed display height, width following the image's aspect ratio.
    #[must_use]
    pub fn for_pixels(width_px: u32, height_px: u32) -> Self {
        let height = PICTURE_HEIGHT_EMU;
        let width = if height_px == 0 {
            0
        } else {
            height * u64::from(width_px) / u64::from(height_px)
        };
        Self { width, height }
    }
}

/// Slide XML referencing its picture as relationship `rId2`.
#[must_use]
pub fn slide_xml(title: &str, extent: PictureExtent) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr><p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:rPr lang="ja-JP" altLang="en-US"/><a:t>{title}</a:t></a:r></a:p></p:txBody></p:sp><p:pic><p:nvPicPr><p:cNvPr id="3" name="Picture 2"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="rId2"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr><a:xfrm><a:off x="{left}" y="{top}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#,
        title = xml_escape(title),
        left = PICTURE_LEFT_EMU,
        top = PICTURE_TOP_EMU,
        cx = extent.width,
        cy = extent.height,
    )
}

#[cfg(test)]
#[path = "slide_tests.rs"]
mod tests;
