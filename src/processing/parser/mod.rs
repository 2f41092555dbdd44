pub mod xtream;
