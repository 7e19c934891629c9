pub mod d400_summary;
pub mod d401_user_map;
