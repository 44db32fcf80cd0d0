//! ユーティリティ関数を提供するモジュール
//!
//! テキスト形式の辞書で使用される、カンマ区切りのフィールドの
//! 分割と書き出しを扱います。

use std::io::Write;

use csv_core::ReadFieldResult;

use crate::errors::Result;

/// CSVセルのデータを適切に引用符で囲んで書き出す
///
/// この関数は、バイト列をCSV形式のセルとして書き出します。
/// 必要に応じてダブルクォートやエスケープ処理を自動的に行います。
///
/// # 引数
///
/// * `wtr` - 書き込み先のWriterオブジェクト
/// * `data` - CSVセルとして書き込むバイト列
pub fn quote_csv_cell<W>(mut wtr: W, mut data: &[u8]) -> std::io::Result<()>
where
    W: Write,
{
    let mut output = [0; 4096];
    let mut writer = csv_core::Writer::new();
    loop {
        let (result, nin, nout) = writer.field(data, &mut output);
        wtr.write_all(&output[..nout])?;
        if result == csv_core::WriteResult::InputEmpty {
            break;
        }
        data = &data[nin..];
    }
    let (result, nout) = writer.finish(&mut output);
    debug_assert_eq!(result, csv_core::WriteResult::InputEmpty);
    wtr.write_all(&output[..nout])?;
    Ok(())
}

/// CSV形式の行を解析してフィールドのベクターに分割する
///
/// ダブルクォートで囲まれたフィールドや、フィールド内のカンマも正しく処理します。
///
/// # 例
///
/// ```
/// # use dicttoolkit::utils::parse_csv_row;
/// let fields = parse_csv_row("word=hello,f=100").unwrap();
/// assert_eq!(fields, vec!["word=hello", "f=100"]);
///
/// let fields_with_quote = parse_csv_row("\"word=1,2\",f=1").unwrap();
/// assert_eq!(fields_with_quote, vec!["word=1,2", "f=1"]);
/// ```
///
/// # エラー
///
/// 引用符の処理後のフィールドが正しいUTF-8でない場合にエラーを返します。
pub fn parse_csv_row(row: &str) -> Result<Vec<String>> {
    let mut features = vec![];
    let mut rdr = csv_core::Reader::new();
    let mut bytes = row.as_bytes();
    let mut output = [0; 4096];
    let mut field = vec![];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        field.extend_from_slice(&output[..nout]);
        bytes = &bytes[nin..];
        let end = match result {
            // Fields longer than the buffer arrive in pieces.
            ReadFieldResult::OutputFull => continue,
            ReadFieldResult::InputEmpty => true,
            ReadFieldResult::Field { record_end } => record_end,
            ReadFieldResult::End => true,
        };
        features.push(std::str::from_utf8(&field)?.to_string());
        field.clear();
        if end {
            break;
        }
    }
    Ok(features)
}
