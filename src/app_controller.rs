use log::{debug, warn};
use std::io::Write;

use crate::app_config::Config;
use crate::content::SCROLL_BLOCK_CONTENT;
use crate::errors::AppError;
use crate::escape::{Stages, audit};

// @module: Application controller

// @struct: Runs the pipeline over the built-in content and writes results
pub struct Controller {
    // @field: App config
    config: Config,
}

impl Controller {
    // @creates: Controller with default config
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    // @creates: Controller with custom config
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    // @returns: Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the pipeline over the built-in content, logging any hazards found
    pub fn stages(&self) -> Stages<'static> {
        if self.config.audit_content {
            let hazards = audit(SCROLL_BLOCK_CONTENT);
            for hazard in &hazards {
                warn!("Content hazard: {}", hazard);
            }
            debug!("Content audit found {} hazard(s)", hazards.len());
        }

        let stages = Stages::run(SCROLL_BLOCK_CONTENT);
        for (label, text) in stages.iter() {
            debug!("Stage {}: {} chars", label, text.chars().count());
        }

        stages
    }

    /// Write the escaped content followed by a single newline
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let stages = self.stages();

        writeln!(out, "{}", stages.output())
            .and_then(|_| out.flush())
            .map_err(|e| AppError::Output(format!("Failed to write escaped content: {}", e)))?;

        debug!("Emitted {} bytes", stages.output().len() + 1);
        Ok(())
    }

    /// Write every stage under a `== label (n chars) ==` header
    pub fn dump_stages<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let stages = self.stages();

        for (label, text) in stages.iter() {
            writeln!(out, "== {} ({} chars) ==", label, text.chars().count())
                .and_then(|_| writeln!(out, "{}", text))
                .map_err(|e| AppError::Output(format!("Failed to write stage {}: {}", label, e)))?;
        }

        out.flush()
            .map_err(|e| AppError::Output(format!("Failed to flush stage dump: {}", e)))?;
        Ok(())
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
