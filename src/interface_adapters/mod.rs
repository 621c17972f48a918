// Interface adapters: HTTP client, wire protocol, drawing surface and console I/O.

pub mod canvas;
pub mod clients;
pub mod console;
pub mod protocol;
pub mod view;
