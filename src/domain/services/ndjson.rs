//! # NDJSON Encoder Service
//!
//! レコードを改行区切り JSON に変換するサービス
//!
//! 各行は `{"rank": 1, "team": {"id": 1}}` の形で出力する
//! （区切りは `", "` と `": "`、非 ASCII 文字は `\uXXXX` でエスケープ）。
//! キーの順序は元のレコードのまま。

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

use crate::domain::entities::standing_record::StandingRecord;

/// 区切りの後に空白を入れ、非 ASCII をエスケープするフォーマッタ
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.bytes().all(|b| b < 0x7f) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if (c as u32) < 0x7f {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// NDJSON エンコーダ
pub struct NdjsonEncoder;

impl NdjsonEncoder {
    /// 1つの値を1行の JSON にする
    pub fn encode_line<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
        value
            .serialize(&mut serializer)
            .context("Failed to serialize record")?;
        String::from_utf8(buf).context("Serialized record is not valid UTF-8")
    }

    /// レコードを改行区切り JSON にする
    ///
    /// # Returns
    ///
    /// レコードごとに1行、`\n` で連結した文字列（末尾の改行なし、空入力は空文字列）
    pub fn encode(records: &[StandingRecord]) -> Result<String> {
        let lines = records
            .iter()
            .map(Self::encode_line)
            .collect::<Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }
}
