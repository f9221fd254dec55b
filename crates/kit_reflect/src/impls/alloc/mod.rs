mod arc;
mod boxed;
mod btree_map;
mod string;
mod vec;
