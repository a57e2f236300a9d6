use crate::core::runner::ProbeRunner;
use crate::domain::model::{RunSummary, ServiceRegistry};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use crate::utils::prompt::prompt_filename;
use crate::utils::validation::{validate_path, Validate};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};

/// 決定輸出檔名：有指定 `--output` 就直接用，否則提示使用者輸入
pub fn resolve_output<R: BufRead, W: Write>(
    output: Option<&str>,
    input: R,
    prompt_out: W,
) -> Result<String> {
    match output {
        Some(path) => {
            validate_path("output", path)?;
            Ok(path.to_string())
        }
        None => prompt_filename(input, prompt_out),
    }
}

/// 完整的一次執行：驗證 registry、取得檔名、建立檔案、跑完所有探測
pub async fn run_session<T, R, W>(
    transport: T,
    registry: ServiceRegistry,
    output: Option<&str>,
    input: R,
    prompt_out: W,
) -> Result<(String, RunSummary)>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    registry.validate()?;

    let filename = resolve_output(output, input, prompt_out)?;
    tracing::debug!("Writing probe output to {}", filename);

    let mut sink = BufWriter::new(File::create(&filename)?);
    let runner = ProbeRunner::new(transport, registry);
    let summary = runner.run(&mut sink).await?;

    Ok((filename, summary))
}
