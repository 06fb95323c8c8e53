//! # Table Schema Value Object
//!
//! Glue カタログテーブルの定義

/// JSONL を読むための Hive 入力フォーマット
pub const TEXT_INPUT_FORMAT: &str = "org.apache.hadoop.mapred.TextInputFormat";

/// Hive 出力フォーマット
pub const HIVE_OUTPUT_FORMAT: &str = "org.apache.hadoop.hive.ql.io.HiveIgnoreKeyTextOutputFormat";

/// OpenX JSON SerDe
pub const JSON_SERDE_LIBRARY: &str = "org.openx.data.jsonserde.JsonSerDe";

/// 外部テーブル
pub const EXTERNAL_TABLE: &str = "EXTERNAL_TABLE";

const STATS_TYPE: &str =
    "struct<played:int,win:int,draw:int,lose:int,goals:struct<for:int,against:int>>";

/// テーブルのカラム
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub data_type: String,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// カラムの一覧
///
/// 書き込まれる JSON レコードの形を手書きで写したもの。
/// データとの整合性は強制されない（ずれたフィールドはクエリで null になる）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    columns: Vec<Column>,
}

impl TableSchema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// 順位表レコード用のスキーマ
    pub fn standings() -> Self {
        Self::new(vec![
            Column::new("rank", "int"),
            Column::new("team", "struct<id:int,name:string,logo:string>"),
            Column::new("points", "int"),
            Column::new("goalsDiff", "int"),
            Column::new("group", "string"),
            Column::new("form", "string"),
            Column::new("status", "string"),
            Column::new("description", "string"),
            Column::new("all", STATS_TYPE),
            Column::new("home", STATS_TYPE),
            Column::new("away", STATS_TYPE),
            Column::new("update", "string"),
        ])
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }
}

/// カタログテーブル定義
///
/// `create_table` に渡すストレージ記述子の内容をまとめたもの
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    pub name: String,
    pub schema: TableSchema,
    /// データの場所（例: `s3://bucket/raw-data/`）
    pub location: String,
    pub input_format: String,
    pub output_format: String,
    pub serialization_library: String,
    pub table_type: String,
}

impl TableDefinition {
    /// JSONL を外部テーブルとして読む定義を作成
    pub fn json_lines(name: impl Into<String>, schema: TableSchema, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema,
            location: location.into(),
            input_format: TEXT_INPUT_FORMAT.to_string(),
            output_format: HIVE_OUTPUT_FORMAT.to_string(),
            serialization_library: JSON_SERDE_LIBRARY.to_string(),
            table_type: EXTERNAL_TABLE.to_string(),
        }
    }
}
