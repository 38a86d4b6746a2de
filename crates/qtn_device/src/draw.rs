//! Text rendering of the initial tensor network
//!
//! Gantree: L3_Device → Draw

use crate::config::{DeviceConfig, Method};
use qtn_core::types::Wires;

const ANSI_SITE: &str = "\x1b[36m";
const ANSI_RESET: &str = "\x1b[0m";

/// Diagram options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawOptions {
    /// Title line (defaults to the device summary)
    pub title: Option<String>,
    /// Wrap site tags in ANSI colour codes
    pub color: bool,
}

impl DrawOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Enable colour
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Render the `|0…0⟩` network over `wires`
///
/// MPS sites are joined by bonds labelled with the bond limit (`χ` when
/// unbounded); exact-network sites are rendered unbonded.
pub fn render_network(config: &DeviceConfig, wires: &Wires, options: &DrawOptions) -> String {
    let title = options.title.clone().unwrap_or_else(|| {
        format!(
            "default.tensor [method={}, contract={}, c_dtype={}]",
            config.method(),
            config.contract,
            config.c_dtype
        )
    });

    if wires.is_empty() {
        return format!("{}\n(empty network)\n", title);
    }

    let sites: Vec<String> = wires
        .iter()
        .map(|w| {
            if options.color {
                format!("{}[{}]{}", ANSI_SITE, w, ANSI_RESET)
            } else {
                format!("[{}]", w)
            }
        })
        .collect();

    let body = match config.method() {
        Method::Mps => {
            let bond = match config.max_bond_dim() {
                Some(dim) => format!("─{}─", dim),
                None => "─χ─".to_string(),
            };
            sites.join(&bond)
        }
        Method::Tn => sites.join("   "),
    };

    format!("{}\n{}\n", title, body)
}
