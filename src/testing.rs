// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Test support: an in-process mock of the catalog API.

use std::thread;

use axum::Router;

/// Serves `router` on a loopback port from its own thread and runtime.
///
/// Returns the base URL, e.g. `http://127.0.0.1:40123`. The server lives for
/// the rest of the test process.
pub(crate) fn spawn_mock_server(router: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock server");
    listener.set_nonblocking(true).expect("non-blocking listener");
    let addr = listener.local_addr().expect("mock server address");

    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("mock server runtime");

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            axum::serve(listener, router).await.expect("mock server");
        });
    });

    format!("http://{addr}")
}
