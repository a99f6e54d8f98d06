use codonav_core::CodonavAnalyzer;
use codonav_core::algorithms::FixedWeights;
use codonav_core::config::{CodonavConfig, OutputFormat};
use codonav_core::output::write_results;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct WasmCodonavOptions {
    pub format: String, // "summary", "gff", "sco", "faa"
}

impl Default for WasmCodonavOptions {
    fn default() -> Self {
        Self {
            format: "summary".to_string(),
        }
    }
}

impl WasmCodonavOptions {
    fn to_config(&self) -> Result<CodonavConfig, String> {
        let output_format = self
            .format
            .parse::<OutputFormat>()
            .map_err(|e| e.to_string())?;
        Ok(CodonavConfig {
            quiet: true,
            output_format,
            num_threads: None,
        })
    }
}

#[wasm_bindgen]
pub struct CodonavResult {
    output: String,
    orf_count: usize,
    sequence_count: usize,
}

#[wasm_bindgen]
impl CodonavResult {
    #[wasm_bindgen(getter)]
    pub fn output(&self) -> String {
        self.output.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn orf_count(&self) -> usize {
        self.orf_count
    }

    #[wasm_bindgen(getter)]
    pub fn sequence_count(&self) -> usize {
        self.sequence_count
    }
}

fn render_fasta(fasta_content: &str, options: &WasmCodonavOptions) -> Result<CodonavResult, String> {
    let analyzer = CodonavAnalyzer::new(options.to_config()?);
    let results = analyzer
        .analyze_fasta_str(fasta_content)
        .map_err(|e| format!("Analysis error: {}", e))?;

    let mut output = Vec::new();
    for result in &results {
        write_results(&mut output, result, analyzer.config.output_format)
            .map_err(|e| format!("Output error: {}", e))?;
    }

    Ok(CodonavResult {
        output: String::from_utf8(output).map_err(|e| format!("UTF-8 error: {}", e))?,
        orf_count: results.iter().map(|r| r.orfs.len()).sum(),
        sequence_count: results.len(),
    })
}

/// Scan FASTA text and render every record in the requested format
#[wasm_bindgen]
pub fn analyze_fasta(fasta_content: &str, options_js: JsValue) -> Result<CodonavResult, JsValue> {
    let options: WasmCodonavOptions = if options_js.is_undefined() || options_js.is_null() {
        WasmCodonavOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options_js)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
    };

    render_fasta(fasta_content, &options).map_err(|e| JsValue::from_str(&e))
}

/// Scan FASTA text and return the structured results (ORFs, activations, scores)
#[wasm_bindgen]
pub fn scan_fasta(fasta_content: &str) -> Result<JsValue, JsValue> {
    let analyzer = CodonavAnalyzer::new(CodonavConfig {
        quiet: true,
        ..Default::default()
    });
    let results = analyzer
        .analyze_fasta_str(fasta_content)
        .map_err(|e| JsValue::from_str(&format!("Analysis error: {}", e)))?;

    serde_wasm_bindgen::to_value(&results).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// First-layer weights padded to a 4×2 matrix for the heatmap view
#[wasm_bindgen]
pub fn weight_heatmap() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&FixedWeights::STANDARD.heatmap())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
