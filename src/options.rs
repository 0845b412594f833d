use anyhow::Context;
use conv_ops::{ConvolutionDescription, INPUT_NAMES};
use log::LevelFilter;
use structopt::{clap::AppSettings, StructOpt};

#[derive(StructOpt)]
#[structopt(name = "conv_ops", setting = AppSettings::AllowNegativeNumbers)]
pub struct Options {
    /// c_in h_in w_in n_filt h_filt w_filt s p
    #[structopt(name = "PARAM")]
    pub params: Vec<String>,
    /// Verbosity of logging to stderr
    #[structopt(long, env = "CONV_OPS_LOG", default_value = "off")]
    pub log_level: LevelFilter,
}

impl Options {
    pub fn run(&self, program: &str) -> anyhow::Result<()> {
        for line in self.lines(program)? {
            println!("{line}");
        }

        Ok(())
    }

    /// Everything to print, or the usage line if the parameter count is wrong.
    pub fn lines(&self, program: &str) -> anyhow::Result<Vec<String>> {
        if self.params.len() != INPUT_NAMES.len() {
            log::warn!("Expected {} parameters, got {}", INPUT_NAMES.len(), self.params.len());
            return Ok(vec![usage(program)]);
        }

        let desc = ConvolutionDescription::from_args(self.parse()?);
        log::debug!("{desc:?}");

        let ops = desc.ops().with_context(|| "Failed to compute convolution.")?;
        log::info!("Output {} x {} with {} adds", ops.output_channels, ops.output_shape, ops.adds);

        let lines = ops.to_lines().with_context(|| "Failed to format results.")?;
        Ok(lines.into())
    }

    fn parse(&self) -> anyhow::Result<[f64; 8]> {
        let mut values = [0.0; 8];

        for ((value, text), name) in values.iter_mut().zip(&self.params).zip(INPUT_NAMES) {
            *value = text.trim().parse().with_context(|| format!("Failed to parse \"{text}\" as {name}."))?;
        }

        Ok(values)
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} {}", INPUT_NAMES.join(" "))
}
