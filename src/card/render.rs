//! Fixed-geometry SVG rendering of participant ID cards and print sheets.

use qrcode::render::svg;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

use crate::roster::CardRecord;

use super::{sheets, CARDS_PER_SHEET};

const CARD_WIDTH: u32 = 420;
const CARD_HEIGHT: u32 = 620;
const HEADER_HEIGHT: u32 = 150;
const LOGO_DIAMETER: u32 = 70;
const AVATAR_DIAMETER: u32 = 180;
const QR_BOX: u32 = 90;
const QR_SIZE: u32 = 80;

const SHEET_MARGIN: u32 = 20;
const SHEET_GAP: u32 = 20;
const SHEET_COLUMNS: u32 = 2;
const SHEET_WIDTH: u32 = SHEET_MARGIN * 2 + CARD_WIDTH * 2 + SHEET_GAP;
const SHEET_HEIGHT: u32 = SHEET_MARGIN * 2 + CARD_HEIGHT * 2 + SHEET_GAP;

const CARD_BACKGROUND: &str = "#0b2545";
const MUTED_TEXT: &str = "#d0d0d0";
const PROGRAM_TITLE: &str = "RAEL";
const PROGRAM_SUBTITLE: &str = "Regional Assembly of Educational Leaders";
const PLACEHOLDER_IMAGE: &str = "/default.png";
const LEFT_LOGO: &str = "/LeftLogo.png";
const RIGHT_LOGO: &str = "/RightLogo.png";

/// QR code for the badge, encoding the participant id as a string.
///
/// Error correction is pinned at level H, the maximum, so the code stays
/// scannable when the printed badge is partially obscured or printed at
/// reduced fidelity.
pub fn encoded_identifier_svg(id: &str) -> Result<String, QrError> {
    let code = QrCode::with_error_correction_level(id.as_bytes(), EcLevel::H)?;
    let document = code
        .render::<svg::Color>()
        .min_dimensions(QR_SIZE, QR_SIZE)
        .quiet_zone(false)
        .dark_color(svg::Color(CARD_BACKGROUND))
        .light_color(svg::Color("transparent"))
        .build();

    // Strip the XML prolog so the code can be inlined into a card.
    Ok(match document.find("<svg") {
        Some(start) => document[start..].to_string(),
        None => document,
    })
}

fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn clip_id(record: &CardRecord) -> String {
    let suffix: String = record
        .id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    format!("avatar-{}", suffix)
}

/// One card's content as an SVG group anchored at the origin.
fn card_group(record: &CardRecord) -> Result<String, QrError> {
    let mut out = String::new();

    // Background
    out.push_str(&format!(
        r#"<rect x="0" y="0" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" rx="12" fill="{CARD_BACKGROUND}"/>"#
    ));

    // Header band with the two program logos, title, subtitle and event date
    out.push_str(&format!(
        r#"<rect x="0" y="0" width="{CARD_WIDTH}" height="{HEADER_HEIGHT}" rx="12" fill="rgba(0,0,0,0.4)"/>"#
    ));
    let logo_r = LOGO_DIAMETER / 2;
    for (cx, href) in [
        (16 + logo_r, LEFT_LOGO),
        (CARD_WIDTH - 16 - logo_r, RIGHT_LOGO),
    ] {
        let cy = 12 + logo_r;
        out.push_str(&format!(
            r##"<circle cx="{cx}" cy="{cy}" r="{logo_r}" fill="#ffffff"/>"##
        ));
        out.push_str(&format!(
            r#"<image href="{href}" x="{}" y="{}" width="{LOGO_DIAMETER}" height="{LOGO_DIAMETER}" preserveAspectRatio="xMidYMid meet"/>"#,
            cx - logo_r,
            cy - logo_r,
        ));
    }
    let center_x = CARD_WIDTH / 2;
    out.push_str(&format!(
        r##"<text x="{center_x}" y="84" text-anchor="middle" font-family="Arial, sans-serif" font-size="24" font-weight="700" fill="#ffffff">{}</text>"##,
        xml_escape(PROGRAM_TITLE)
    ));
    out.push_str(&format!(
        r#"<text x="{center_x}" y="106" text-anchor="middle" font-family="Arial, sans-serif" font-size="14" fill="{MUTED_TEXT}">{}</text>"#,
        xml_escape(PROGRAM_SUBTITLE)
    ));
    out.push_str(&format!(
        r#"<text x="{center_x}" y="126" text-anchor="middle" font-family="Arial, sans-serif" font-size="14" fill="{MUTED_TEXT}">{}</text>"#,
        xml_escape(&record.formatted_event_date)
    ));

    // Circular profile photo. A URL that fails to load leaves the region
    // blank; no fallback fetch is attempted.
    let image_url = if record.participant_image_url.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        record.participant_image_url.as_str()
    };
    let avatar_r = AVATAR_DIAMETER / 2;
    let avatar_cy = HEADER_HEIGHT + 24 + avatar_r;
    let clip = clip_id(record);
    out.push_str(&format!(
        r#"<clipPath id="{clip}"><circle cx="{center_x}" cy="{avatar_cy}" r="{avatar_r}"/></clipPath>"#
    ));
    out.push_str(&format!(
        r##"<circle cx="{center_x}" cy="{avatar_cy}" r="{avatar_r}" fill="#ffffff" stroke="#ffffff" stroke-width="5"/>"##
    ));
    out.push_str(&format!(
        r#"<image href="{}" x="{}" y="{}" width="{AVATAR_DIAMETER}" height="{AVATAR_DIAMETER}" clip-path="url(#{clip})" preserveAspectRatio="xMidYMid slice"/>"#,
        xml_escape(image_url),
        center_x - avatar_r,
        avatar_cy - avatar_r,
    ));

    // Name and role block
    out.push_str(&format!(
        r#"<text x="{center_x}" y="398" text-anchor="middle" font-family="Arial, sans-serif" font-size="15" fill="{MUTED_TEXT}">{}</text>"#,
        xml_escape(record.position.as_deref().unwrap_or_default())
    ));
    out.push_str(&format!(
        r##"<text x="{center_x}" y="430" text-anchor="middle" font-family="Arial, sans-serif" font-size="28" font-weight="600" fill="#ffffff">{}</text>"##,
        xml_escape(&record.name.to_uppercase())
    ));

    // Footer: identity lines on the left, QR on the right. The affiliation
    // line shows the school when one exists, otherwise the office.
    let mut lines = vec![
        format!("Full Name: {}", record.full_name.to_uppercase()),
        format!(
            "Division: {}",
            record.division_name.as_deref().unwrap_or_default()
        ),
    ];
    match (record.school.as_deref(), record.office.as_deref()) {
        (Some(school), _) => lines.push(format!("School: {}", school)),
        (None, Some(office)) => lines.push(format!("Office: {}", office)),
        (None, None) => {}
    }
    lines.push(format!(
        "Phone: {}",
        record.phone_number.as_deref().unwrap_or_default()
    ));

    let mut line_y = CARD_HEIGHT - 20 - QR_BOX + 14;
    for line in &lines {
        out.push_str(&format!(
            r##"<text x="20" y="{line_y}" font-family="Arial, sans-serif" font-size="11" fill="#ffffff">{}</text>"##,
            xml_escape(line)
        ));
        line_y += 18;
    }

    let qr_x = CARD_WIDTH - 20 - QR_BOX;
    let qr_y = CARD_HEIGHT - 20 - QR_BOX;
    out.push_str(&format!(
        r##"<rect x="{qr_x}" y="{qr_y}" width="{QR_BOX}" height="{QR_BOX}" rx="8" fill="#ffffff" stroke="#cccccc"/>"##
    ));
    let pad = (QR_BOX - QR_SIZE) / 2;
    out.push_str(&format!(
        r#"<g transform="translate({},{})">{}</g>"#,
        qr_x + pad,
        qr_y + pad,
        encoded_identifier_svg(&record.id)?,
    ));

    Ok(out)
}

/// Renders one record as a standalone 420x620 SVG card.
pub fn render_card(record: &CardRecord) -> Result<String, QrError> {
    Ok(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" viewBox="0 0 {CARD_WIDTH} {CARD_HEIGHT}">{}</svg>"#,
        card_group(record)?
    ))
}

/// Renders up to [`CARDS_PER_SHEET`] cards as one printable sheet, laid out
/// on a two-by-two grid in filtered order.
pub fn render_sheet(cards: &[&CardRecord]) -> Result<String, QrError> {
    debug_assert!(cards.len() <= CARDS_PER_SHEET);

    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="sheet" width="{SHEET_WIDTH}" height="{SHEET_HEIGHT}" viewBox="0 0 {SHEET_WIDTH} {SHEET_HEIGHT}">"#
    );
    for (slot, card) in cards.iter().enumerate() {
        let col = slot as u32 % SHEET_COLUMNS;
        let row = slot as u32 / SHEET_COLUMNS;
        let x = SHEET_MARGIN + col * (CARD_WIDTH + SHEET_GAP);
        let y = SHEET_MARGIN + row * (CARD_HEIGHT + SHEET_GAP);
        out.push_str(&format!(
            r#"<g transform="translate({x},{y})">{}</g>"#,
            card_group(card)?
        ));
    }
    out.push_str("</svg>");
    Ok(out)
}

/// Renders the whole filtered roster as a print-ready HTML document, one
/// sheet per page. An empty roster renders an explicit empty state rather
/// than a blank page.
pub fn render_print_document(records: &[&CardRecord]) -> Result<String, QrError> {
    let mut body = String::new();
    if records.is_empty() {
        body.push_str(r#"<p class="empty">No participants found.</p>"#);
    } else {
        for sheet in sheets(records) {
            body.push_str(&render_sheet(sheet)?);
        }
    }

    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Participant ID Cards</title>\n<style>\n\
         body {{ margin: 0; background: #ffffff; }}\n\
         svg.sheet {{ display: block; margin: 0 auto; }}\n\
         p.empty {{ font-family: Arial, sans-serif; text-align: center; color: #666666; margin-top: 48px; }}\n\
         @media print {{ svg.sheet {{ page-break-after: always; }} }}\n\
         </style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        body
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CardRecord {
        CardRecord {
            id: "RAEL-2025-0001".into(),
            full_name: "Maria C. Dela Cruz".into(),
            name: "Maria".into(),
            position: Some("School Head".into()),
            participant_type: "Delegate".into(),
            phone_number: Some("09171234567".into()),
            participant_image_url: "https://storage.example/p/0001.png".into(),
            school: Some("Daet Elementary School".into()),
            office: None,
            district_name: Some("Daet North".into()),
            division_name: Some("Camarines Norte".into()),
            event_name: "Leadership Summit".into(),
            event_description: None,
            formatted_event_date: "March 10-15, 2025".into(),
        }
    }

    #[test]
    fn encoded_identifier_is_an_inline_svg_fragment() {
        let fragment = encoded_identifier_svg("RAEL-2025-0001").unwrap();
        assert!(fragment.starts_with("<svg"));
        assert!(!fragment.starts_with("<?xml"));
    }

    #[test]
    fn card_shows_school_line_and_no_office_line() {
        let svg = render_card(&record()).unwrap();
        assert!(svg.contains("School: Daet Elementary School"));
        assert!(!svg.contains("Office:"));
    }

    #[test]
    fn card_shows_office_line_when_school_absent() {
        let mut r = record();
        r.school = None;
        r.office = Some("Records Section".into());
        let svg = render_card(&r).unwrap();
        assert!(svg.contains("Office: Records Section"));
        assert!(!svg.contains("School:"));
    }

    #[test]
    fn card_omits_affiliation_line_when_both_absent() {
        let mut r = record();
        r.school = None;
        r.office = None;
        let svg = render_card(&r).unwrap();
        assert!(!svg.contains("School:"));
        assert!(!svg.contains("Office:"));
    }

    #[test]
    fn card_uppercases_names_and_labels_them() {
        let svg = render_card(&record()).unwrap();
        assert!(svg.contains("Full Name: MARIA C. DELA CRUZ"));
        assert!(svg.contains(">MARIA<"));
        assert!(svg.contains("School Head"));
        assert!(svg.contains("March 10-15, 2025"));
    }

    #[test]
    fn empty_image_url_falls_back_to_placeholder() {
        let mut r = record();
        r.participant_image_url = String::new();
        let svg = render_card(&r).unwrap();
        assert!(svg.contains(r#"href="/default.png""#));
    }

    #[test]
    fn card_text_is_xml_escaped() {
        let mut r = record();
        r.school = Some("A & B <School>".into());
        let svg = render_card(&r).unwrap();
        assert!(svg.contains("School: A &amp; B &lt;School&gt;"));
    }

    #[test]
    fn sheet_places_each_card_once() {
        let records: Vec<CardRecord> = (0..3)
            .map(|i| {
                let mut r = record();
                r.id = format!("RAEL-2025-{:04}", i);
                r.full_name = format!("Participant Number {}", i);
                r
            })
            .collect();
        let refs: Vec<&CardRecord> = records.iter().collect();
        let sheet = render_sheet(&refs).unwrap();
        for r in &records {
            let footer = format!("Full Name: {}", r.full_name.to_uppercase());
            assert_eq!(sheet.matches(footer.as_str()).count(), 1);
        }
    }

    #[test]
    fn print_document_renders_empty_state() {
        let html = render_print_document(&[]).unwrap();
        assert!(html.contains("No participants found."));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn print_document_paginates_five_records_onto_two_sheets() {
        let records: Vec<CardRecord> = (0..5)
            .map(|i| {
                let mut r = record();
                r.id = format!("RAEL-2025-{:04}", i);
                r
            })
            .collect();
        let refs: Vec<&CardRecord> = records.iter().collect();
        let html = render_print_document(&refs).unwrap();
        assert_eq!(html.matches(r#"class="sheet""#).count(), 2);
    }
}
