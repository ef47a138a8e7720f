use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::error::{Edge2PdfError, Result};

pub struct ConvertOptions {
    pub headless: bool,
    pub timeout: Duration,
    pub page_load_delay: Duration,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            headless: true,
            timeout: Duration::from_secs(30),
            page_load_delay: Duration::from_secs(2),
        }
    }
}

/// One browser process shared by the whole batch. Dropping the converter
/// shuts the browser down, on error paths included.
pub struct PdfConverter {
    _browser: Browser,
    tab: Arc<Tab>,
    page_load_delay: Duration,
}

impl PdfConverter {
    pub fn launch(options: &ConvertOptions) -> Result<Self> {
        let launch_options = LaunchOptions::default_builder()
            .headless(options.headless)
            .build()
            .map_err(|e| Edge2PdfError::Browser {
                message: e.to_string(),
            })?;

        let browser = Browser::new(launch_options).map_err(|e| Edge2PdfError::Browser {
            message: e.to_string(),
        })?;

        let tab = browser.new_tab().map_err(|e| Edge2PdfError::Browser {
            message: e.to_string(),
        })?;

        tab.set_default_timeout(options.timeout);

        Ok(PdfConverter {
            _browser: browser,
            tab,
            page_load_delay: options.page_load_delay,
        })
    }

    pub fn convert(&self, url: &str, output_path: &Path) -> Result<()> {
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| Edge2PdfError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        // Pages with dynamic content keep rendering after the load event.
        thread::sleep(self.page_load_delay);

        let pdf = self
            .tab
            .print_to_pdf(Some(pdf_options()))
            .map_err(|e| Edge2PdfError::Render {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        fs::write(output_path, pdf).map_err(|source| Edge2PdfError::Io {
            path: output_path.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}

// A4 paper, 0.4in margins, page-number footer.
fn pdf_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        display_header_footer: Some(true),
        print_background: Some(true),
        paper_width: Some(8.27),
        paper_height: Some(11.69),
        margin_top: Some(0.4),
        margin_bottom: Some(0.4),
        margin_left: Some(0.4),
        margin_right: Some(0.4),
        header_template: Some("<div></div>".to_string()),
        footer_template: Some(
            "<div style=\"font-size:10px; text-align:center; width:100%;\">\
             <span class=\"pageNumber\"></span> / <span class=\"totalPages\"></span></div>"
                .to_string(),
        ),
        ..PrintToPdfOptions::default()
    }
}
