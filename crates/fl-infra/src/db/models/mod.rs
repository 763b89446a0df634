mod item_row;

pub use item_row::ItemRow;
