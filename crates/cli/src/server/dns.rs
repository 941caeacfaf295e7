use beacon_dns_infrastructure::dns::{DnsServerHandler, MAX_MESSAGE_SIZE};
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

pub async fn start_dns_server(
    bind_addr: String,
    handler: DnsServerHandler,
    num_workers: usize,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    info!(bind_address = %socket_addr, num_workers, "Starting DNS server with SO_REUSEPORT");

    let sockets = bind_udp_sockets(socket_addr, num_workers)?;
    let local_addr = sockets[0].local_addr()?;

    info!("DNS server ready: {} workers on {}", sockets.len(), local_addr);

    serve(sockets, handler).await;
    Ok(())
}

/// Binds `count` UDP sockets to one address. When `socket_addr` asks for
/// port 0, every socket shares the port the kernel picked for the first.
fn bind_udp_sockets(socket_addr: SocketAddr, count: usize) -> anyhow::Result<Vec<UdpSocket>> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let first = create_udp_socket(domain, socket_addr)?;
    let shared_addr = first.local_addr()?;

    let mut sockets = Vec::with_capacity(count.max(1));
    sockets.push(first);
    for _ in 1..count {
        sockets.push(create_udp_socket(domain, shared_addr)?);
    }
    Ok(sockets)
}

async fn serve(sockets: Vec<UdpSocket>, handler: DnsServerHandler) {
    let handler = Arc::new(handler);
    let mut join_set: JoinSet<()> = JoinSet::new();

    for (i, socket) in sockets.into_iter().enumerate() {
        let handler = handler.clone();
        join_set.spawn(async move {
            run_udp_worker(socket, handler, i).await;
        });
    }

    while join_set.join_next().await.is_some() {}
}

async fn run_udp_worker(socket: UdpSocket, handler: Arc<DnsServerHandler>, worker_id: usize) {
    let mut recv_buf = [0u8; MAX_MESSAGE_SIZE];

    debug!(worker = worker_id, "UDP worker started");

    loop {
        let (len, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) if is_transient_recv_error(&e) => {
                debug!(worker = worker_id, error = %e, "Transient UDP recv error");
                continue;
            }
            Err(e) => {
                error!(worker = worker_id, error = %e, "UDP recv error, stopping worker");
                break;
            }
        };

        let response = match handler.handle_datagram(&recv_buf[..len]) {
            Ok(response) => response,
            Err(e) => {
                warn!(worker = worker_id, client = %from, bytes = len, error = %e, "Dropping malformed DNS datagram");
                continue;
            }
        };

        if let Err(e) = socket.send_to(&response, from).await {
            error!(worker = worker_id, client = %from, error = %e, "UDP send error");
        }
    }
}

/// ICMP errors from an earlier send surface as reset/refused on the next
/// receive on some platforms. They say nothing about this socket.
fn is_transient_recv_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionRefused
    )
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
