//! Fixed package parts of a presentation: one master, one "Title Only"
//! layout and one theme, plus the manifests that list the slides.

use std::fmt::Write;

pub const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

const NS_PKG_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const CT_BASE: &str = "application/vnd.openxmlformats-officedocument";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Slide size: 10in x 7.5in.
pub const SLIDE_WIDTH_EMU: u64 = 9_144_000;
pub const SLIDE_HEIGHT_EMU: u64 = 6_858_000;

/// First slide id; PowerPoint requires ids of 256 or above.
const FIRST_SLIDE_ID: usize = 256;
/// Presentation relationships before the first slide.
const FIXED_PRESENTATION_RELS: usize = 5;

/// Relationship id of slide `index` (zero-based) in `presentation.xml.rels`.
#[must_use]
pub fn slide_rel_id(index: usize) -> String {
    format!("rId{}", index + FIXED_PRESENTATION_RELS + 1)
}

/// Package path of slide `index` (zero-based).
#[must_use]
pub fn slide_part_name(index: usize) -> String {
    format!("ppt/slides/slide{}.xml", index + 1)
}

#[must_use]
pub fn slide_rels_part_name(index: usize) -> String {
    format!("ppt/slides/_rels/slide{}.xml.rels", index + 1)
}

#[must_use]
pub fn media_part_name(index: usize) -> String {
    format!("ppt/media/image{}.png", index + 1)
}

fn relationship(out: &mut String, id: &str, kind: &str, target: &str) {
    let _ = write!(
        out,
        r#"<Relationship Id="{id}" Type="{REL_BASE}/{kind}" Target="{target}"/>"#
    );
}

fn relationships(entries: &[(&str, &str, &str)]) -> String {
    let mut out = format!("{XML_DECL}<Relationships xmlns=\"{NS_PKG_RELS}\">");
    for (id, kind, target) in entries {
        relationship(&mut out, id, kind, target);
    }
    out.push_str("</Relationships>");
    out
}

#[must_use]
pub fn content_types(slide_count: usize) -> String {
    let mut out = format!(
        "{XML_DECL}<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
<Default Extension=\"xml\" ContentType=\"application/xml\"/>\
<Default Extension=\"png\" ContentType=\"image/png\"/>"
    );
    let overrides = [
        ("/ppt/presentation.xml", "presentationml.presentation.main+xml"),
        ("/ppt/slideMasters/slideMaster1.xml", "presentationml.slideMaster+xml"),
        ("/ppt/slideLayouts/slideLayout1.xml", "presentationml.slideLayout+xml"),
        ("/ppt/theme/theme1.xml", "theme+xml"),
        ("/ppt/presProps.xml", "presentationml.presProps+xml"),
        ("/ppt/viewProps.xml", "presentationml.viewProps+xml"),
        ("/ppt/tableStyles.xml", "presentationml.tableStyles+xml"),
        ("/docProps/app.xml", "extended-properties+xml"),
    ];
    for (part, kind) in overrides {
        let _ = write!(out, r#"<Override PartName="{part}" ContentType="{CT_BASE}.{kind}"/>"#);
    }
    out.push_str(
        r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
    );
    for i in 0..slide_count {
        let _ = write!(
            out,
            r#"<Override PartName="/{}" ContentType="{CT_BASE}.presentationml.slide+xml"/>"#,
            slide_part_name(i)
        );
    }
    out.push_str("</Types>");
    out
}

#[must_use]
pub fn root_rels() -> String {
    let mut out = format!("{XML_DECL}<Relationships xmlns=\"{NS_PKG_RELS}\">");
    relationship(&mut out, "rId1", "officeDocument", "ppt/presentation.xml");
    let _ = write!(
        out,
        r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#
    );
    relationship(&mut out, "rId3", "extended-properties", "docProps/app.xml");
    out.push_str("</Relationships>");
    out
}

#[must_use]
pub fn app_properties(slide_count: usize) -> String {
    format!(
        "{XML_DECL}<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\" \
xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes\">\
<Application>{}</Application><Slides>{slide_count}</Slides><PresentationFormat>On-screen Show (4:3)</PresentationFormat>\
</Properties>",
        env!("CARGO_PKG_NAME")
    )
}

#[must_use]
pub fn core_properties(title: &str) -> String {
    format!(
        "{XML_DECL}<cp:coreProperties xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\
<dc:title>{}</dc:title><dc:creator>{}</dc:creator></cp:coreProperties>",
        crate::chart::xml_escape(title),
        env!("CARGO_PKG_NAME")
    )
}

#[must_use]
pub fn presentation(slide_count: usize) -> String {
    let mut out = format!(
        "{XML_DECL}<p:presentation xmlns:a=\"{NS_A}\" xmlns:r=\"{NS_R}\" xmlns:p=\"{NS_P}\" saveSubsetFonts=\"1\">\
<p:sldMasterIdLst><p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/></p:sldMasterIdLst>"
    );
    if slide_count > 0 {
        out.push_str("<p:sldIdLst>");
        for i in 0..slide_count {
            let _ = write!(
                out,
                r#"<p:sldId id="{}" r:id="{}"/>"#,
                FIRST_SLIDE_ID + i,
                slide_rel_id(i)
            );
        }
        out.push_str("</p:sldIdLst>");
    }
    let _ = write!(
        out,
        "<p:sldSz cx=\"{SLIDE_WIDTH_EMU}\" cy=\"{SLIDE_HEIGHT_EMU}\" type=\"screen4x3\"/>\
<p:notesSz cx=\"{SLIDE_HEIGHT_EMU}\" cy=\"{SLIDE_WIDTH_EMU}\"/>\
<p:defaultTextStyle><a:defPPr><a:defRPr lang=\"ja-JP\"/></a:defPPr></p:defaultTextStyle>\
</p:presentation>"
    );
    out
}

#[must_use]
pub fn presentation_rels(slide_count: usize) -> String {
    let mut entries = vec![
        ("rId1".to_string(), "slideMaster", "slideMasters/slideMaster1.xml".to_string()),
        ("rId2".to_string(), "theme", "theme/theme1.xml".to_string()),
        ("rId3".to_string(), "presProps", "presProps.xml".to_string()),
        ("rId4".to_string(), "viewProps", "viewProps.xml".to_string()),
        ("rId5".to_string(), "tableStyles", "tableStyles.xml".to_string()),
    ];
    for i in 0..slide_count {
        entries.push((slide_rel_id(i), "slide", format!("slides/slide{}.xml", i + 1)));
    }
    let borrowed: Vec<(&str, &str, &str)> = entries
        .iter()
        .map(|(id, kind, target)| (id.as_str(), *kind, target.as_str()))
        .collect();
    relationships(&borrowed)
}

#[must_use]
pub fn slide_rels(index: usize) -> String {
    let image = format!("../media/image{}.png", index + 1);
    relationships(&[
        ("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml"),
        ("rId2", "image", image.as_str()),
    ])
}

#[must_use]
pub fn slide_master_rels() -> String {
    relationships(&[
        ("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml"),
        ("rId2", "theme", "../theme/theme1.xml"),
    ])
}

#[must_use]
pub fn slide_layout_rels() -> String {
    relationships(&[("rId1", "slideMaster", "../slideMasters/slideMaster1.xml")])
}

const EMPTY_GROUP: &str = r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#;

/// Title placeholder geometry shared by master and slides.
pub const TITLE_OFFSET_EMU: (u64, u64) = (457_200, 274_638);
pub const TITLE_EXTENT_EMU: (u64, u64) = (8_229_600, 1_143_000);

#[must_use]
pub fn slide_master() -> String {
    let (x, y) = TITLE_OFFSET_EMU;
    let (cx, cy) = TITLE_EXTENT_EMU;
    format!(
        "{XML_DECL}<p:sldMaster xmlns:a=\"{NS_A}\" xmlns:r=\"{NS_R}\" xmlns:p=\"{NS_P}\">\
<p:cSld><p:bg><p:bgRef idx=\"1001\"><a:schemeClr val=\"bg1\"/></p:bgRef></p:bg><p:spTree>{EMPTY_GROUP}\
<p:sp><p:nvSpPr><p:cNvPr id=\"2\" name=\"Title Placeholder 1\"/><p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr><p:nvPr><p:ph type=\"title\"/></p:nvPr></p:nvSpPr>\
<p:spPr><a:xfrm><a:off x=\"{x}\" y=\"{y}\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm><a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></p:spPr>\
<p:txBody><a:bodyPr anchor=\"ctr\"/><a:lstStyle/><a:p><a:endParaRPr lang=\"ja-JP\"/></a:p></p:txBody></p:sp>\
</p:spTree></p:cSld>\
<p:clrMap bg1=\"lt1\" tx1=\"dk1\" bg2=\"lt2\" tx2=\"dk2\" accent1=\"accent1\" accent2=\"accent2\" accent3=\"accent3\" accent4=\"accent4\" accent5=\"accent5\" accent6=\"accent6\" hlink=\"hlink\" folHlink=\"folHlink\"/>\
<p:sldLayoutIdLst><p:sldLayoutId id=\"2147483649\" r:id=\"rId1\"/></p:sldLayoutIdLst>\
<p:txStyles>\
<p:titleStyle><a:lvl1pPr algn=\"ctr\"><a:defRPr sz=\"3200\"><a:solidFill><a:schemeClr val=\"tx1\"/></a:solidFill><a:latin typeface=\"+mj-lt\"/><a:ea typeface=\"+mj-ea\"/></a:defRPr></a:lvl1pPr></p:titleStyle>\
<p:bodyStyle><a:lvl1pPr><a:defRPr sz=\"2000\"><a:solidFill><a:schemeClr val=\"tx1\"/></a:solidFill></a:defRPr></a:lvl1pPr></p:bodyStyle>\
<p:otherStyle><a:lvl1pPr><a:defRPr sz=\"1800\"><a:solidFill><a:schemeClr val=\"tx1\"/></a:solidFill></a:defRPr></a:lvl1pPr></p:otherStyle>\
</p:txStyles></p:sldMaster>"
    )
}

#[must_use]
pub fn slide_layout() -> String {
    format!(
        "{XML_DECL}<p:sldLayout xmlns:a=\"{NS_A}\" xmlns:r=\"{NS_R}\" xmlns:p=\"{NS_P}\" type=\"titleOnly\" preserve=\"1\">\
<p:cSld name=\"Title Only\"><p:spTree>{EMPTY_GROUP}\
<p:sp><p:nvSpPr><p:cNvPr id=\"2\" name=\"Title 1\"/><p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr><p:nvPr><p:ph type=\"title\"/></p:nvPr></p:nvSpPr>\
<p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang=\"ja-JP\"/></a:p></p:txBody></p:sp>\
</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"
    )
}

const SOLID_FILL: &str = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;

#[must_use]
pub fn theme() -> String {
    let fill = SOLID_FILL;
    let line = r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#;
    let effect = "<a:effectStyle><a:effectLst/></a:effectStyle>";
    format!(
        "{XML_DECL}<a:theme xmlns:a=\"{NS_A}\" name=\"Office Theme\"><a:themeElements>\
<a:clrScheme name=\"Office\">\
<a:dk1><a:sysClr val=\"windowText\" lastClr=\"000000\"/></a:dk1><a:lt1><a:sysClr val=\"window\" lastClr=\"FFFFFF\"/></a:lt1>\
<a:dk2><a:srgbClr val=\"1F497D\"/></a:dk2><a:lt2><a:srgbClr val=\"EEECE1\"/></a:lt2>\
<a:accent1><a:srgbClr val=\"4F81BD\"/></a:accent1><a:accent2><a:srgbClr val=\"C0504D\"/></a:accent2>\
<a:accent3><a:srgbClr val=\"9BBB59\"/></a:accent3><a:accent4><a:srgbClr val=\"8064A2\"/></a:accent4>\
<a:accent5><a:srgbClr val=\"4BACC6\"/></a:accent5><a:accent6><a:srgbClr val=\"F79646\"/></a:accent6>\
<a:hlink><a:srgbClr val=\"0000FF\"/></a:hlink><a:folHlink><a:srgbClr val=\"800080\"/></a:folHlink>\
</a:clrScheme>\
<a:fontScheme name=\"Office\">\
<a:majorFont><a:latin typeface=\"Calibri\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/><a:font script=\"Jpan\" typeface=\"Yu Gothic\"/></a:majorFont>\
<a:minorFont><a:latin typeface=\"Calibri\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/><a:font script=\"Jpan\" typeface=\"Yu Gothic\"/></a:minorFont>\
</a:fontScheme>\
<a:fmtScheme name=\"Office\">\
<a:fillStyleLst>{fill}{fill}{fill}</a:fillStyleLst>\
<a:lnStyleLst>{line}{line}{line}</a:lnStyleLst>\
<a:effectStyleLst>{effect}{effect}{effect}</a:effectStyleLst>\
<a:bgFillStyleLst>{fill}{fill}{fill}</a:bgFillStyleLst>\
</a:fmtScheme></a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>"
    )
}

#[must_use]
pub fn presentation_properties() -> String {
    format!("{XML_DECL}<p:presentationPr xmlns:a=\"{NS_A}\" xmlns:r=\"{NS_R}\" xmlns:p=\"{NS_P}\"/>")
}

#[must_use]
pub fn view_properties() -> String {
    format!(
        "{XML_DECL}<p:viewPr xmlns:a=\"{NS_A}\" xmlns:r=\"{NS_R}\" xmlns:p=\"{NS_P}\">\
<p:normalViewPr/><p:slideViewPr><p:cSldViewPr><p:cViewPr><p:scale><a:sx n=\"100\" d=\"100\"/><a:sy n=\"100\" d=\"100\"/></p:scale><p:origin x=\"0\" y=\"0\"/></p:cViewPr></p:cSldViewPr></p:slideViewPr>\
<p:gridSpacing cx=\"76200\" cy=\"76200\"/></p:viewPr>"
    )
}

#[must_use]
pub fn table_styles() -> String {
    format!(
        "{XML_DECL}<a:tblStyleLst xmlns:a=\"{NS_A}\" def=\"{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}\"/>"
    )
}

#[cfg(test)]
#[path = "parts_tests.rs"]
mod tests;
