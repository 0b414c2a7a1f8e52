mod class_list;
mod tag;

pub use class_list::ClassList;
pub use tag::Tag;
