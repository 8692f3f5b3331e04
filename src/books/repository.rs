pub mod memory_book_repository;
