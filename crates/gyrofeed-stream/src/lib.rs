//! Streaming delivery channel for gyrofeed.
//!
//! A [`StreamingSensorClient`] owns one outbound connection and writes one
//! `<x>,<y>,<z>\n` line per [`send`](StreamingSensorClient::send). The
//! connection is opened through the [`Transport`](gyrofeed_core::Transport)
//! seam; [`TcpTransport`] is the production implementation.

#![deny(static_mut_refs)]

pub mod client;
pub mod codec;
pub mod transport;

pub use client::StreamingSensorClient;
pub use codec::{decode_line, encode_line};
pub use transport::{TcpLink, TcpTransport, TcpTransportConfig};
