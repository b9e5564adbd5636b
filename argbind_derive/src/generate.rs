mod bindable;
mod field;
