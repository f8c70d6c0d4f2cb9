use scraper::{Html, Selector};

use crate::domain::errors::ExtractionError;

/// Selector for the status modal element
const STATUS_MODAL_SELECTOR: &str = "#statusModal";
/// Selector for the titled box inside the modal
const BOX_TITLE_SELECTOR: &str = "div.box-titulo";
/// Selector for the nested divisions carrying the status style
const DIV_SELECTOR: &str = "div";

/// Extracts the status style string from the company page markup
///
/// The extraction is a hard dependency on the exact third-party page
/// structure: modal with id statusModal, containing a titled box,
/// containing two nested divisions, the innermost carrying the style
/// attribute with the status color.
pub struct StatusExtractor;

impl StatusExtractor {
    /// Extract the style string of the innermost status division
    pub fn extract_status_style(html: &str) -> Result<String, ExtractionError> {
        let document = Html::parse_document(html);

        let modal_selector = Selector::parse(STATUS_MODAL_SELECTOR)
            .map_err(|e| ExtractionError::SelectorError(e.to_string()))?;
        let box_title_selector = Selector::parse(BOX_TITLE_SELECTOR)
            .map_err(|e| ExtractionError::SelectorError(e.to_string()))?;
        let div_selector = Selector::parse(DIV_SELECTOR)
            .map_err(|e| ExtractionError::SelectorError(e.to_string()))?;

        let modal = document
            .select(&modal_selector)
            .next()
            .ok_or_else(|| ExtractionError::ElementNotFound("statusModal".to_string()))?;

        let box_title = modal
            .select(&box_title_selector)
            .next()
            .ok_or_else(|| ExtractionError::ElementNotFound("box-titulo".to_string()))?;

        let outer_div = box_title
            .select(&div_selector)
            .next()
            .ok_or_else(|| ExtractionError::ElementNotFound("box-titulo > div".to_string()))?;

        let inner_div = outer_div
            .select(&div_selector)
            .next()
            .ok_or_else(|| ExtractionError::ElementNotFound("box-titulo > div > div".to_string()))?;

        let style = inner_div
            .value()
            .attr("style")
            .ok_or_else(|| ExtractionError::AttributeMissing("style".to_string()))?;

        Ok(style.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_page(style: &str) -> String {
        format!(
            r#"<html>
              <body>
                <div id="statusModal" class="modal">
                  <div class="box-titulo">
                    <div>
                      <div style="{}">Status do serviço</div>
                    </div>
                  </div>
                </div>
              </body>
            </html>"#,
            style
        )
    }

    #[test]
    fn test_extracts_style_from_nested_divisions() {
        let html = status_page("background-color: #f51616;");
        let style = StatusExtractor::extract_status_style(&html).unwrap();
        assert_eq!(style, "background-color: #f51616;");
    }

    #[test]
    fn test_extracts_style_when_service_is_up() {
        let html = status_page("background-color: #16f51d;");
        let style = StatusExtractor::extract_status_style(&html).unwrap();
        assert_eq!(style, "background-color: #16f51d;");
    }

    #[test]
    fn test_missing_modal_is_an_error() {
        let html = "<html><body><div class=\"box-titulo\"></div></body></html>";
        let result = StatusExtractor::extract_status_style(html);
        assert!(matches!(
            result,
            Err(ExtractionError::ElementNotFound(ref what)) if what == "statusModal"
        ));
    }

    #[test]
    fn test_missing_box_title_is_an_error() {
        let html = "<html><body><div id=\"statusModal\"></div></body></html>";
        let result = StatusExtractor::extract_status_style(html);
        assert!(matches!(
            result,
            Err(ExtractionError::ElementNotFound(ref what)) if what == "box-titulo"
        ));
    }

    #[test]
    fn test_missing_style_attribute_is_an_error() {
        let html = r#"<html><body>
            <div id="statusModal">
              <div class="box-titulo"><div><div>sem estilo</div></div></div>
            </div>
        </body></html>"#;
        let result = StatusExtractor::extract_status_style(html);
        assert!(matches!(
            result,
            Err(ExtractionError::AttributeMissing(ref what)) if what == "style"
        ));
    }
}
