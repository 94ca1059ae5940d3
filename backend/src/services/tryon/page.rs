use crate::assets::inline::EncodedImage;

const TEMPLATE: &str = include_str!("../../../templates/index.html");
const RESULT_SLOT: &str = "{{ result }}";

/// Renders the landing page, with the try-on result when there is one.
pub fn render(result: Option<&EncodedImage>) -> String {
    let slot = match result {
        Some(image) => format!(
            r#"<img src="{}" alt="Try-on result">"#,
            image.data_uri()
        ),
        None => String::new(),
    };
    TEMPLATE.replace(RESULT_SLOT, &slot)
}
