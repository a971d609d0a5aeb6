/// SERIAL 主キーをラップする ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`i32` をラップ）
/// - `derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)`
/// - `from_i32()`: データベースやパスパラメータの値から復元
/// - `as_i32()`: 内部の値を取得
/// - `Display` impl
///
/// ID はデータベースが採番するため、アプリケーション側で生成する `new()` は持たない。
///
/// # 使用例
///
/// ```rust
/// use taskboard_domain::project::ProjectId;
///
/// let id = ProjectId::from_i32(7);
/// assert_eq!(id.as_i32(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
macro_rules! define_serial_id {
   (
      $(#[$meta:meta])*
      $vis:vis struct $Name:ident;
   ) => {
      $(#[$meta])*
      #[derive(
         Debug, Clone, Copy, PartialEq, Eq, Hash,
         serde::Serialize, serde::Deserialize,
      )]
      #[serde(transparent)]
      $vis struct $Name(i32);

      impl $Name {
         /// 既存の値から ID を作成する
         pub fn from_i32(value: i32) -> Self {
            Self(value)
         }

         /// 内部の値を取得する
         pub fn as_i32(&self) -> i32 {
            self.0
         }
      }

      impl std::fmt::Display for $Name {
         fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
         }
      }
   };
}

/// バリデーション付き String Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `new()`: 空白のみでないかのチェック + 最大長チェック（値は受け取ったまま保持）
/// - `from_db()`: 保存済みの値から検証なしで復元
/// - `as_str()`: 文字列参照
/// - `into_string()`: 所有権を持つ文字列に変換
/// - `Display` impl
///
/// # 引数
///
/// - `label`: エラーメッセージに使うフィールド名（例: `"name"`）
/// - `max_length`: 最大文字数（`chars().count()` でカウント）
///
/// # 使用例
///
/// ```rust
/// use taskboard_domain::project::ProjectName;
///
/// let name = ProjectName::new(" Website ").unwrap();
/// assert_eq!(name.as_str(), " Website ");
/// assert!(ProjectName::new("   ").is_err());
/// ```
macro_rules! define_validated_string {
   (
      $(#[$meta:meta])*
      $vis:vis struct $Name:ident {
         label: $label:expr,
         max_length: $max_length:expr $(,)?
      }
   ) => {
      $(#[$meta])*
      #[derive(
         Debug, Clone, PartialEq, Eq,
         serde::Serialize, serde::Deserialize,
      )]
      #[serde(transparent)]
      $vis struct $Name(String);

      impl $Name {
         pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
            let value = value.into();

            if value.trim().is_empty() {
               return Err($crate::DomainError::Validation(format!(
                  "{} is required",
                  $label
               )));
            }

            if value.chars().count() > $max_length {
               return Err($crate::DomainError::Validation(format!(
                  "{} must be at most {} characters",
                  $label, $max_length
               )));
            }

            Ok(Self(value))
         }

         /// 保存済みの値から復元する
         ///
         /// ストアにある値は検証済みとは限らない（空文字列など）ため、検証せずに受け入れる。
         pub fn from_db(value: String) -> Self {
            Self(value)
         }

         /// 文字列参照を取得する
         pub fn as_str(&self) -> &str {
            &self.0
         }

         /// 所有権を持つ文字列に変換する
         pub fn into_string(self) -> String {
            self.0
         }
      }

      impl std::fmt::Display for $Name {
         fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
         }
      }
   };
}

/// 必須フィールドを取り出す
///
/// `None` の場合は `"<label> is required"` のバリデーションエラーを返す。
/// JSON ボディのフィールド欠落と空文字列を同じメッセージで扱うために使用する。
macro_rules! require_field {
   ($value:expr, $label:expr) => {
      $value.ok_or_else(|| $crate::DomainError::Validation(format!("{} is required", $label)))
   };
}
