/// ベクトル・行列の要素型として使う trait 群。
///
/// - [`Scalar`][]: 要素型の統一インターフェース（加減算・スカラー倍・零元・大きさ）
/// - [`CastFrom`][]: 要素型間の明示的な変換（宣言された組のみ許可）
mod cast;
mod scalar;

pub use cast::CastFrom;
pub use scalar::Scalar;
