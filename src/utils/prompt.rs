use crate::utils::error::Result;
use crate::utils::validation::validate_path;
use std::io::{BufRead, Write};

pub const FILENAME_PROMPT: &str = "filename=";

/// 顯示 `filename=` 提示並讀取一行作為輸出檔名
pub fn prompt_filename<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<String> {
    output.write_all(FILENAME_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let filename = line.trim_end_matches(['\r', '\n']).to_string();
    validate_path("filename", &filename)?;

    Ok(filename)
}
