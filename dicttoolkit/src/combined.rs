//! テキスト形式(combined形式)の辞書の読み書き
//!
//! combined形式は、1行目のヘッダーと、単語ごとの属性行からなる
//! 人が読める形式の辞書ソースです。
//!
//! ```text
//! dictionary=main:en_us,locale=en_US,version=54
//!  word=hello,f=120
//!   shortcut=hi,f=10
//!   bigram=world,f=90
//!  word=world,f=100,historicalInfo=1414726260:3:2,possibly_offensive=true
//!  ngram=peace,f=80
//!   prev_word[0]=world
//!   prev_word[1]=hello,beginning_of_sentence=true
//! ```
//!
//! 空行と `#` で始まる行は無視されます。

use std::io::{BufRead, BufReader, Read, Write};

use crate::code_point::CodePoint;
use crate::dictionary::header::DICTIONARY_ID_KEY;
use crate::dictionary::{AttributeMap, IntermediateDict, IntermediateDictHeader};
use crate::errors::{DictError, Result};
use crate::utf8;
use crate::utils::{parse_csv_row, quote_csv_cell};
use crate::word_property::{
    HistoricalInfo, NgramProperty, PrevWord, ProbabilityInfo, ShortcutProperty, UnigramProperty,
    WordProperty,
};

const WORD_TAG: &str = "word";
const BIGRAM_TAG: &str = "bigram";
const NGRAM_TAG: &str = "ngram";
const NGRAM_PREV_WORD_TAG: &str = "prev_word";
const SHORTCUT_TAG: &str = "shortcut";
const PROBABILITY_TAG: &str = "f";
const HISTORICAL_INFO_TAG: &str = "historicalInfo";
const HISTORICAL_INFO_SEPARATOR: char = ':';
const BEGINNING_OF_SENTENCE_TAG: &str = "beginning_of_sentence";
const NOT_A_WORD_TAG: &str = "not_a_word";
const POSSIBLY_OFFENSIVE_TAG: &str = "possibly_offensive";
const TRUE_VALUE: &str = "true";

const FORMAT_NAME: &str = "combined";

/// 読み込み結果の統計
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReadStats {
    /// 辞書に追加された単語数
    pub added: usize,

    /// 重複のため読み飛ばされた単語数
    pub duplicates: usize,

    /// 長さが不正なため読み飛ばされた単語数
    pub invalid_length: usize,
}

/// combined形式の辞書を読み込みます。
///
/// 重複した単語と長さが不正な単語は警告を出力して読み飛ばします。
///
/// # エラー
///
/// ヘッダーがない、未知の属性がある、数値が不正などの構造的な誤りがある場合、
/// 行番号を含む [`DictError::InvalidFormat`] を返します。
pub fn read<R>(rdr: R) -> Result<IntermediateDict>
where
    R: Read,
{
    read_with_stats(rdr).map(|(dict, _)| dict)
}

/// combined形式の辞書を読み込み、統計とともに返します。
pub fn read_with_stats<R>(rdr: R) -> Result<(IntermediateDict, ReadStats)>
where
    R: Read,
{
    let mut builder: Option<Builder> = None;
    for (i, line) in BufReader::new(rdr).lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields = parse_fields(trimmed, line_no)?;
        match builder.as_mut() {
            None => builder = Some(Builder::new(parse_header(&fields, line_no)?)),
            Some(builder) => builder.push_line(&fields, line_no)?,
        }
    }
    let builder = builder.ok_or_else(|| {
        DictError::invalid_format(FORMAT_NAME, "The header line is missing.")
    })?;
    builder.finish()
}

/// 辞書をcombined形式で書き出します。
///
/// ヘッダーの辞書IDを先頭に、残りの属性をキー順に出力した後、
/// すべての単語をトライの順序で出力します。
pub fn write<W>(dict: &IntermediateDict, mut wtr: W) -> Result<()>
where
    W: Write,
{
    write_header(dict.header(), &mut wtr)?;
    for word_property in dict.word_properties() {
        write_word_property(word_property, &mut wtr)?;
    }
    Ok(())
}

type Field = (String, String);

fn parse_fields(line: &str, line_no: usize) -> Result<Vec<Field>> {
    parse_csv_row(line)?
        .into_iter()
        .map(|field| match field.split_once('=') {
            Some((k, v)) => Ok((k.to_string(), v.to_string())),
            None => Err(DictError::invalid_format(
                FORMAT_NAME,
                format!("line {line_no}: missing '=' in field '{field}'"),
            )),
        })
        .collect()
}

fn parse_header(fields: &[Field], line_no: usize) -> Result<IntermediateDictHeader> {
    match fields.first() {
        Some((k, _)) if k == DICTIONARY_ID_KEY => {}
        _ => {
            return Err(DictError::invalid_format(
                FORMAT_NAME,
                format!("line {line_no}: the first line must start with '{DICTIONARY_ID_KEY}='"),
            ))
        }
    }
    let attribute_map: AttributeMap = fields
        .iter()
        .map(|(k, v)| (utf8::code_points(k), utf8::code_points(v)))
        .collect();
    Ok(IntermediateDictHeader::new(attribute_map))
}

fn is_literal_true(value: &str) -> bool {
    value.eq_ignore_ascii_case(TRUE_VALUE)
}

fn parse_int(value: &str, line_no: usize) -> Result<i32> {
    value.trim().parse().map_err(|e| {
        DictError::invalid_format(
            FORMAT_NAME,
            format!("line {line_no}: invalid number '{value}': {e}"),
        )
    })
}

fn parse_historical_info(value: &str, line_no: usize) -> Result<HistoricalInfo> {
    let values = value
        .split(HISTORICAL_INFO_SEPARATOR)
        .map(|v| parse_int(v, line_no))
        .collect::<Result<Vec<_>>>()?;
    match values.as_slice() {
        &[timestamp, level, count] => Ok(HistoricalInfo::new(timestamp, level, count)),
        _ => Err(DictError::invalid_format(
            FORMAT_NAME,
            format!("line {line_no}: historicalInfo must be 'timestamp:level:count'"),
        )),
    }
}

fn unknown_key(key: &str, line_no: usize) -> DictError {
    DictError::invalid_format(FORMAT_NAME, format!("line {line_no}: unknown key '{key}'"))
}

/// `f` と `historicalInfo` からなる確率情報を解析します。
fn parse_probability_info(fields: &[Field], line_no: usize) -> Result<ProbabilityInfo> {
    let mut probability = None;
    let mut historical_info = None;
    for (k, v) in fields {
        match k.as_str() {
            PROBABILITY_TAG => probability = Some(parse_int(v, line_no)?),
            HISTORICAL_INFO_TAG => historical_info = Some(parse_historical_info(v, line_no)?),
            _ => return Err(unknown_key(k, line_no)),
        }
    }
    let probability = probability.ok_or_else(|| {
        DictError::invalid_format(
            FORMAT_NAME,
            format!("line {line_no}: '{PROBABILITY_TAG}' is missing"),
        )
    })?;
    Ok(ProbabilityInfo {
        probability,
        historical_info,
    })
}

fn parse_prev_word_index(key: &str) -> Option<usize> {
    key.strip_prefix(NGRAM_PREV_WORD_TAG)?
        .strip_prefix('[')?
        .strip_suffix(']')?
        .parse()
        .ok()
}

struct PendingNgram {
    target_code_points: Vec<CodePoint>,
    probability_info: ProbabilityInfo,
    prev_words: Vec<PrevWord>,
    line_no: usize,
}

struct PendingWord {
    code_points: Vec<CodePoint>,
    unigram_property: UnigramProperty,
    ngram_properties: Vec<NgramProperty>,
}

struct Builder {
    dict: IntermediateDict,
    stats: ReadStats,
    word: Option<PendingWord>,
    ngram: Option<PendingNgram>,
}

impl Builder {
    fn new(header: IntermediateDictHeader) -> Self {
        Self {
            dict: IntermediateDict::new(header),
            stats: ReadStats::default(),
            word: None,
            ngram: None,
        }
    }

    fn current_word(&mut self, key: &str, line_no: usize) -> Result<&mut PendingWord> {
        self.word.as_mut().ok_or_else(|| {
            DictError::invalid_format(
                FORMAT_NAME,
                format!("line {line_no}: '{key}' appears before any word"),
            )
        })
    }

    fn push_line(&mut self, fields: &[Field], line_no: usize) -> Result<()> {
        let Some(((key, value), rest)) = fields.split_first() else {
            return Ok(());
        };
        match key.as_str() {
            WORD_TAG => {
                self.flush_word()?;
                self.word = Some(Self::parse_word(value, rest, line_no)?);
            }
            SHORTCUT_TAG => {
                let probability = parse_probability_info(rest, line_no)?.probability;
                let shortcut = ShortcutProperty {
                    target_code_points: utf8::code_points(value),
                    probability,
                };
                self.current_word(key, line_no)?
                    .unigram_property
                    .shortcuts
                    .push(shortcut);
            }
            BIGRAM_TAG => {
                self.flush_ngram()?;
                let probability_info = parse_probability_info(rest, line_no)?;
                let word = self.current_word(key, line_no)?;
                let ngram = NgramProperty {
                    prev_words: vec![PrevWord::Word(word.code_points.clone())],
                    target_code_points: utf8::code_points(value),
                    probability_info,
                };
                word.ngram_properties.push(ngram);
            }
            NGRAM_TAG => {
                self.flush_ngram()?;
                self.current_word(key, line_no)?;
                self.ngram = Some(PendingNgram {
                    target_code_points: utf8::code_points(value),
                    probability_info: parse_probability_info(rest, line_no)?,
                    prev_words: vec![],
                    line_no,
                });
            }
            _ => match parse_prev_word_index(key) {
                Some(index) => self.push_prev_word(index, value, rest, line_no)?,
                None => return Err(unknown_key(key, line_no)),
            },
        }
        Ok(())
    }

    fn parse_word(value: &str, rest: &[Field], line_no: usize) -> Result<PendingWord> {
        let mut unigram_property = UnigramProperty::default();
        let mut probability_fields = vec![];
        for (k, v) in rest {
            match k.as_str() {
                BEGINNING_OF_SENTENCE_TAG => unigram_property.is_beginning_of_sentence = is_literal_true(v),
                NOT_A_WORD_TAG => unigram_property.is_not_a_word = is_literal_true(v),
                POSSIBLY_OFFENSIVE_TAG => unigram_property.is_possibly_offensive = is_literal_true(v),
                _ => probability_fields.push((k.clone(), v.clone())),
            }
        }
        unigram_property.probability_info = parse_probability_info(&probability_fields, line_no)?;
        Ok(PendingWord {
            code_points: utf8::code_points(value),
            unigram_property,
            ngram_properties: vec![],
        })
    }

    fn push_prev_word(
        &mut self,
        index: usize,
        value: &str,
        rest: &[Field],
        line_no: usize,
    ) -> Result<()> {
        let mut is_beginning_of_sentence = false;
        for (k, v) in rest {
            match k.as_str() {
                BEGINNING_OF_SENTENCE_TAG => is_beginning_of_sentence = is_literal_true(v),
                _ => return Err(unknown_key(k, line_no)),
            }
        }
        let ngram = self.ngram.as_mut().ok_or_else(|| {
            DictError::invalid_format(
                FORMAT_NAME,
                format!("line {line_no}: '{NGRAM_PREV_WORD_TAG}' appears outside of an n-gram"),
            )
        })?;
        if index != ngram.prev_words.len() {
            return Err(DictError::invalid_format(
                FORMAT_NAME,
                format!(
                    "line {line_no}: expected {NGRAM_PREV_WORD_TAG}[{}], found {NGRAM_PREV_WORD_TAG}[{index}]",
                    ngram.prev_words.len()
                ),
            ));
        }
        ngram.prev_words.push(if is_beginning_of_sentence {
            PrevWord::BeginningOfSentence
        } else {
            PrevWord::Word(utf8::code_points(value))
        });
        Ok(())
    }

    fn flush_ngram(&mut self) -> Result<()> {
        let Some(ngram) = self.ngram.take() else {
            return Ok(());
        };
        if ngram.prev_words.is_empty() {
            return Err(DictError::invalid_format(
                FORMAT_NAME,
                format!("line {}: the n-gram has no previous word", ngram.line_no),
            ));
        }
        let ngram_property = NgramProperty {
            prev_words: ngram.prev_words,
            target_code_points: ngram.target_code_points,
            probability_info: ngram.probability_info,
        };
        self.current_word(NGRAM_TAG, ngram.line_no)?
            .ngram_properties
            .push(ngram_property);
        Ok(())
    }

    fn flush_word(&mut self) -> Result<()> {
        self.flush_ngram()?;
        let Some(word) = self.word.take() else {
            return Ok(());
        };
        let word_property =
            WordProperty::new(word.code_points, word.unigram_property, word.ngram_properties);
        match self.dict.try_add_word(&word_property) {
            Ok(()) => self.stats.added += 1,
            Err(DictError::DuplicateWord) => {
                log::warn!(
                    "Skipped a duplicate word: {}",
                    utf8::to_string(word_property.code_points())?
                );
                self.stats.duplicates += 1;
            }
            Err(e @ DictError::InvalidWordLength { .. }) => {
                log::warn!(
                    "Skipped a word '{}': {e}",
                    utf8::to_string(word_property.code_points())?
                );
                self.stats.invalid_length += 1;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn finish(mut self) -> Result<(IntermediateDict, ReadStats)> {
        self.flush_word()?;
        log::debug!(
            "Read {} words ({} duplicates, {} invalid)",
            self.stats.added,
            self.stats.duplicates,
            self.stats.invalid_length
        );
        Ok((self.dict, self.stats))
    }
}

fn write_fields<W>(wtr: &mut W, indent: &str, fields: &[Field]) -> Result<()>
where
    W: Write,
{
    wtr.write_all(indent.as_bytes())?;
    for (i, (k, v)) in fields.iter().enumerate() {
        if i != 0 {
            wtr.write_all(b",")?;
        }
        quote_csv_cell(&mut *wtr, format!("{k}={v}").as_bytes())?;
    }
    wtr.write_all(b"\n")?;
    Ok(())
}

fn probability_fields(probability_info: &ProbabilityInfo) -> Vec<Field> {
    let mut fields = vec![(
        PROBABILITY_TAG.to_string(),
        probability_info.probability.to_string(),
    )];
    if let Some(h) = probability_info.historical_info {
        fields.push((
            HISTORICAL_INFO_TAG.to_string(),
            format!(
                "{}{HISTORICAL_INFO_SEPARATOR}{}{HISTORICAL_INFO_SEPARATOR}{}",
                h.timestamp, h.level, h.count
            ),
        ));
    }
    fields
}

fn write_header<W>(header: &IntermediateDictHeader, wtr: &mut W) -> Result<()>
where
    W: Write,
{
    let id_key = utf8::code_points(DICTIONARY_ID_KEY);
    let mut fields = vec![(
        DICTIONARY_ID_KEY.to_string(),
        header.attribute(DICTIONARY_ID_KEY)?.unwrap_or_default(),
    )];
    for (k, v) in header.attribute_map() {
        if *k == id_key {
            continue;
        }
        fields.push((utf8::to_string(k)?, utf8::to_string(v)?));
    }
    write_fields(wtr, "", &fields)
}

fn write_word_property<W>(word_property: &WordProperty, wtr: &mut W) -> Result<()>
where
    W: Write,
{
    let unigram = word_property.unigram_property();
    let mut fields = vec![(
        WORD_TAG.to_string(),
        utf8::to_string(word_property.code_points())?,
    )];
    fields.extend(probability_fields(&unigram.probability_info));
    for (flag, tag) in [
        (unigram.is_beginning_of_sentence, BEGINNING_OF_SENTENCE_TAG),
        (unigram.is_not_a_word, NOT_A_WORD_TAG),
        (unigram.is_possibly_offensive, POSSIBLY_OFFENSIVE_TAG),
    ] {
        if flag {
            fields.push((tag.to_string(), TRUE_VALUE.to_string()));
        }
    }
    write_fields(wtr, " ", &fields)?;

    for shortcut in &unigram.shortcuts {
        let fields = [
            (
                SHORTCUT_TAG.to_string(),
                utf8::to_string(&shortcut.target_code_points)?,
            ),
            (PROBABILITY_TAG.to_string(), shortcut.probability.to_string()),
        ];
        write_fields(wtr, "  ", &fields)?;
    }

    for ngram in word_property.ngram_properties() {
        let mut fields = vec![(
            NGRAM_TAG.to_string(),
            utf8::to_string(&ngram.target_code_points)?,
        )];
        fields.extend(probability_fields(&ngram.probability_info));
        write_fields(wtr, " ", &fields)?;
        for (i, prev_word) in ngram.prev_words.iter().enumerate() {
            let key = format!("{NGRAM_PREV_WORD_TAG}[{i}]");
            let fields = match prev_word {
                PrevWord::Word(code_points) => vec![(key, utf8::to_string(code_points)?)],
                PrevWord::BeginningOfSentence => vec![
                    (key, String::new()),
                    (
                        BEGINNING_OF_SENTENCE_TAG.to_string(),
                        TRUE_VALUE.to_string(),
                    ),
                ],
            };
            write_fields(wtr, "  ", &fields)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prev_word_index() {
        assert_eq!(parse_prev_word_index("prev_word[0]"), Some(0));
        assert_eq!(parse_prev_word_index("prev_word[12]"), Some(12));
        assert_eq!(parse_prev_word_index("prev_word"), None);
        assert_eq!(parse_prev_word_index("prev_word[x]"), None);
    }

    #[test]
    fn test_parse_historical_info() {
        assert_eq!(
            parse_historical_info("1414726260:3:2", 1).unwrap(),
            HistoricalInfo::new(1414726260, 3, 2)
        );
        assert!(parse_historical_info("1:2", 1).is_err());
        assert!(parse_historical_info("1:2:x", 1).is_err());
    }

    #[test]
    fn test_is_literal_true() {
        assert!(is_literal_true("true"));
        assert!(is_literal_true("TRUE"));
        assert!(!is_literal_true("1"));
    }
}
