//! Download Commands
//!
//! Hands a CSV export to the browser through a temporary anchor.

use wasm_bindgen::JsCast;

use crate::checklist::CsvExport;
use crate::error::{ChecklistError, ChecklistResult};

fn js_err(e: wasm_bindgen::JsValue) -> ChecklistError {
    ChecklistError::Download(format!("{:?}", e))
}

pub fn download_csv(export: &CsvExport) -> ChecklistResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ChecklistError::Download("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| ChecklistError::Download("no body".to_string()))?;

    let link = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ChecklistError::Download("anchor cast failed".to_string()))?;
    link.set_href(&export.data_uri());
    link.set_download(export.filename);

    body.append_child(&link).map_err(js_err)?;
    link.click();
    link.remove();

    log::info!("[EXPORT] Downloaded {}", export.filename);
    Ok(())
}
