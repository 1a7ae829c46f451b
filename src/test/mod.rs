// Code used in the crate test suite.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::thread;
use std::time::Duration;

use byteorder::{WriteBytesExt, BE};
use crossbeam_channel::{bounded, Receiver};

use crate::{Mode, Result, Script, Server};


const TESTER_ADDR: u16 = 0x0e80;
const ECU_ADDR: u16 = 0x1234;

// Start a server on an ephemeral port in a background thread.  The returned
// channel yields the result of `serve()` once it returns, which only happens
// in `Mode::Once` or on failure.
pub fn start_server(script: Script, mode: Mode) -> (SocketAddr, Receiver<Result<usize>>) {
    let server = Server::bind("127.0.0.1:0", script, mode).unwrap();
    let addr = server.local_addr().unwrap();
    let (done_send, done_recv) = bounded(1);
    thread::Builder::new()
        .name("stub server".into())
        .spawn(move || {
            let _ = done_send.send(server.serve());
        })
        .unwrap();
    (addr, done_recv)
}

pub fn connect(addr: SocketAddr) -> TcpStream {
    let socket = TcpStream::connect(addr).unwrap();
    socket.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    socket
}

// Send a request and read back exactly one reply of the expected length.
pub fn exchange(socket: &mut TcpStream, request: &[u8], reply_len: usize) -> Vec<u8> {
    socket.write_all(request).unwrap();
    let mut reply = vec![0; reply_len];
    socket.read_exact(&mut reply).unwrap();
    reply
}

// Build a frame the way a tester would send it: version, inverse version,
// payload type, payload length, payload.
pub fn frame(payload_type: u16, payload: &[u8]) -> Vec<u8> {
    let mut out = vec![0x02, 0xfd];
    out.write_u16::<BE>(payload_type).unwrap();
    out.write_u32::<BE>(payload.len() as u32).unwrap();
    out.extend_from_slice(payload);
    out
}

pub fn routing_activation_request() -> Vec<u8> {
    let mut payload = vec![];
    payload.write_u16::<BE>(TESTER_ADDR).unwrap();
    payload.extend_from_slice(&[0, 0, 0, 0, 0]);
    frame(0x0005, &payload)
}

pub fn diag_request(uds: &[u8]) -> Vec<u8> {
    let mut payload = vec![];
    payload.write_u16::<BE>(TESTER_ADDR).unwrap();
    payload.write_u16::<BE>(ECU_ADDR).unwrap();
    payload.extend_from_slice(uds);
    frame(0x8001, &payload)
}
