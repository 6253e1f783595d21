pub mod coin_banks;
