pub mod games_memory;
