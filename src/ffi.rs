//! C-callable surface over [`SsspSession`], built when the crate is compiled
//! as a cdylib with the `ffi` feature.
//!
//! Conventions:
//!
//! - Vertex ids and weights cross the boundary as `int64_t`; ids are
//!   0-based. Status returns are `int`: [`DSSSP_OK`] or a negative
//!   `DSSSP_ERR_*` code.
//! - Output buffers are allocated by the caller and merely filled here. A
//!   distance or predecessor buffer of `vertex_count` entries always
//!   suffices, and so does a path buffer of `vertex_count` entries. The only
//!   object this library allocates for the caller is the session handle,
//!   released with [`dsssp_session_free`].
//! - Unreachable vertices and absent predecessors are written as
//!   [`DSSSP_UNREACHABLE`] (-1); an unreachable destination is a normal
//!   outcome, not an error.
//! - Handles are not thread-safe. Use one session per thread or serialize
//!   calls externally.

use libc::{c_char, c_int};

use crate::session::SsspSession;
use crate::Error;

pub const DSSSP_OK: c_int = 0;
pub const DSSSP_ERR_NULL_POINTER: c_int = -1;
pub const DSSSP_ERR_INVALID_VERTEX_COUNT: c_int = -2;
pub const DSSSP_ERR_VERTEX_OUT_OF_RANGE: c_int = -3;
pub const DSSSP_ERR_INVALID_SOURCE: c_int = -4;
pub const DSSSP_ERR_NOT_INITIALIZED: c_int = -5;
pub const DSSSP_ERR_NO_COMPUTATION: c_int = -6;
pub const DSSSP_ERR_NEGATIVE_WEIGHT: c_int = -7;
pub const DSSSP_ERR_OVERFLOW: c_int = -8;
pub const DSSSP_ERR_CANCELLED: c_int = -9;
pub const DSSSP_ERR_BUFFER_TOO_SMALL: c_int = -10;

/// Sentinel written for unreachable vertices and absent predecessors
pub const DSSSP_UNREACHABLE: i64 = -1;

/// Opaque session handle owned by the caller
pub struct FfiSession {
    session: SsspSession<i64>,
}

fn status(err: &Error) -> c_int {
    match err {
        Error::InvalidVertexCount(_) => DSSSP_ERR_INVALID_VERTEX_COUNT,
        Error::VertexOutOfRange(..) => DSSSP_ERR_VERTEX_OUT_OF_RANGE,
        Error::InvalidSource(..) => DSSSP_ERR_INVALID_SOURCE,
        Error::NotInitialized => DSSSP_ERR_NOT_INITIALIZED,
        Error::NoComputationAvailable => DSSSP_ERR_NO_COMPUTATION,
        Error::NegativeWeight(..) => DSSSP_ERR_NEGATIVE_WEIGHT,
        Error::WeightOverflow(..) => DSSSP_ERR_OVERFLOW,
        Error::Cancelled => DSSSP_ERR_CANCELLED,
    }
}

fn status_of(result: crate::Result<()>) -> c_int {
    match result {
        Ok(()) => DSSSP_OK,
        Err(err) => status(&err),
    }
}

fn session_ref<'a>(handle: *const FfiSession) -> Option<&'a SsspSession<i64>> {
    unsafe { handle.as_ref() }.map(|ffi| &ffi.session)
}

fn session_mut<'a>(handle: *mut FfiSession) -> Option<&'a mut SsspSession<i64>> {
    unsafe { handle.as_mut() }.map(|ffi| &mut ffi.session)
}

fn vertex_index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

/// Creates a session for vertex ids `0..vertex_count`. Returns null when
/// the count is zero or negative.
#[no_mangle]
pub extern "C" fn dsssp_session_new(vertex_count: i64) -> *mut FfiSession {
    let count = match usize::try_from(vertex_count) {
        Ok(count) => count,
        Err(_) => return std::ptr::null_mut(),
    };
    match SsspSession::new(count) {
        Ok(session) => Box::into_raw(Box::new(FfiSession { session })),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Releases a session handle. Passing null is a no-op.
#[no_mangle]
pub extern "C" fn dsssp_session_free(handle: *mut FfiSession) {
    if !handle.is_null() {
        unsafe {
            drop(Box::from_raw(handle));
        }
    }
}

/// Reinitializes the session for a new vertex bound, dropping all edges and
/// any computed tables.
#[no_mangle]
pub extern "C" fn dsssp_session_reset(handle: *mut FfiSession, vertex_count: i64) -> c_int {
    let session = match session_mut(handle) {
        Some(session) => session,
        None => return DSSSP_ERR_NULL_POINTER,
    };
    let count = match usize::try_from(vertex_count) {
        Ok(count) => count,
        Err(_) => return DSSSP_ERR_INVALID_VERTEX_COUNT,
    };
    status_of(session.reset(count))
}

/// Drops all edges and any computed tables; the vertex bound stays.
#[no_mangle]
pub extern "C" fn dsssp_session_clear(handle: *mut FfiSession) -> c_int {
    match session_mut(handle) {
        Some(session) => {
            session.clear();
            DSSSP_OK
        }
        None => DSSSP_ERR_NULL_POINTER,
    }
}

/// Adds one directed edge `from -> to`.
#[no_mangle]
pub extern "C" fn dsssp_add_edge(
    handle: *mut FfiSession,
    from: i64,
    to: i64,
    weight: i64,
) -> c_int {
    let session = match session_mut(handle) {
        Some(session) => session,
        None => return DSSSP_ERR_NULL_POINTER,
    };
    match (vertex_index(from), vertex_index(to)) {
        (Some(from), Some(to)) => status_of(session.add_edge(from, to, weight)),
        _ => DSSSP_ERR_VERTEX_OUT_OF_RANGE,
    }
}

/// Adds an undirected edge as two directed edges.
#[no_mangle]
pub extern "C" fn dsssp_add_edge_undirected(
    handle: *mut FfiSession,
    from: i64,
    to: i64,
    weight: i64,
) -> c_int {
    let session = match session_mut(handle) {
        Some(session) => session,
        None => return DSSSP_ERR_NULL_POINTER,
    };
    match (vertex_index(from), vertex_index(to)) {
        (Some(from), Some(to)) => status_of(session.add_edge_undirected(from, to, weight)),
        _ => DSSSP_ERR_VERTEX_OUT_OF_RANGE,
    }
}

/// Runs Dijkstra from `source` over the current graph.
#[no_mangle]
pub extern "C" fn dsssp_compute(handle: *mut FfiSession, source: i64) -> c_int {
    let session = match session_mut(handle) {
        Some(session) => session,
        None => return DSSSP_ERR_NULL_POINTER,
    };
    match vertex_index(source) {
        Some(source) => status_of(session.compute(source)),
        None => DSSSP_ERR_INVALID_SOURCE,
    }
}

/// Writes the distance from the computed source to `vertex` into
/// `out_distance`, or [`DSSSP_UNREACHABLE`] when the vertex was never
/// reached.
#[no_mangle]
pub extern "C" fn dsssp_distance_to(
    handle: *const FfiSession,
    vertex: i64,
    out_distance: *mut i64,
) -> c_int {
    let session = match session_ref(handle) {
        Some(session) => session,
        None => return DSSSP_ERR_NULL_POINTER,
    };
    if out_distance.is_null() {
        return DSSSP_ERR_NULL_POINTER;
    }
    let vertex = match vertex_index(vertex) {
        Some(vertex) => vertex,
        None => return DSSSP_ERR_VERTEX_OUT_OF_RANGE,
    };
    match session.distance_to(vertex) {
        Ok(distance) => {
            unsafe { *out_distance = distance.unwrap_or(DSSSP_UNREACHABLE) };
            DSSSP_OK
        }
        Err(err) => status(&err),
    }
}

/// Fills `buffer` with the full distance table, one entry per vertex in id
/// order, [`DSSSP_UNREACHABLE`] for vertices never reached. `len` is the
/// buffer capacity in entries and must be at least the vertex count; on any
/// error the buffer is left untouched.
#[no_mangle]
pub extern "C" fn dsssp_all_distances(
    handle: *const FfiSession,
    buffer: *mut i64,
    len: usize,
) -> c_int {
    let session = match session_ref(handle) {
        Some(session) => session,
        None => return DSSSP_ERR_NULL_POINTER,
    };
    if buffer.is_null() {
        return DSSSP_ERR_NULL_POINTER;
    }
    let distances = match session.distances() {
        Ok(distances) => distances,
        Err(err) => return status(&err),
    };
    if len < distances.len() {
        return DSSSP_ERR_BUFFER_TOO_SMALL;
    }
    let out = unsafe { std::slice::from_raw_parts_mut(buffer, distances.len()) };
    for (slot, distance) in out.iter_mut().zip(distances.iter().copied()) {
        *slot = distance.unwrap_or(DSSSP_UNREACHABLE);
    }
    DSSSP_OK
}

/// Writes the vertex sequence from the computed source to `destination`
/// into `buffer` and its length into `out_len`. An unreachable destination
/// writes length 0 and succeeds. `capacity` is the buffer capacity in
/// entries; a buffer with room for `vertex_count` entries always suffices.
#[no_mangle]
pub extern "C" fn dsssp_path_to(
    handle: *const FfiSession,
    destination: i64,
    buffer: *mut i64,
    capacity: usize,
    out_len: *mut usize,
) -> c_int {
    let session = match session_ref(handle) {
        Some(session) => session,
        None => return DSSSP_ERR_NULL_POINTER,
    };
    if buffer.is_null() || out_len.is_null() {
        return DSSSP_ERR_NULL_POINTER;
    }
    let destination = match vertex_index(destination) {
        Some(destination) => destination,
        None => return DSSSP_ERR_VERTEX_OUT_OF_RANGE,
    };
    let path = match session.path_to(destination) {
        Ok(path) => path,
        Err(err) => return status(&err),
    };
    if path.len() > capacity {
        return DSSSP_ERR_BUFFER_TOO_SMALL;
    }
    let out = unsafe { std::slice::from_raw_parts_mut(buffer, path.len()) };
    for (slot, vertex) in out.iter_mut().zip(path.iter()) {
        *slot = *vertex as i64;
    }
    unsafe { *out_len = path.len() };
    DSSSP_OK
}

/// Declared vertex bound of the session, or -1 for a null handle.
#[no_mangle]
pub extern "C" fn dsssp_vertex_count(handle: *const FfiSession) -> i64 {
    match session_ref(handle) {
        Some(session) => session.vertex_count() as i64,
        None => -1,
    }
}

/// Crate version as a static NUL-terminated string, for callers that want
/// to verify they loaded the right library.
#[no_mangle]
pub extern "C" fn dsssp_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

/// One-shot computation without a session handle: builds a graph from the
/// three parallel edge arrays (`edge_count` entries each), runs Dijkstra
/// from `source` and fills the caller's tables. `out_distances` must hold
/// `vertex_count` entries; `out_predecessors` may be null to skip the
/// predecessor export, otherwise it must also hold `vertex_count` entries.
/// With `undirected` set, every array entry inserts both directions.
#[no_mangle]
pub extern "C" fn dsssp_compute_batch(
    vertex_count: i64,
    edge_count: usize,
    edges_from: *const i64,
    edges_to: *const i64,
    edge_weights: *const i64,
    undirected: bool,
    source: i64,
    out_distances: *mut i64,
    out_predecessors: *mut i64,
) -> c_int {
    if out_distances.is_null() {
        return DSSSP_ERR_NULL_POINTER;
    }
    if edge_count > 0 && (edges_from.is_null() || edges_to.is_null() || edge_weights.is_null()) {
        return DSSSP_ERR_NULL_POINTER;
    }
    let count = match usize::try_from(vertex_count) {
        Ok(count) => count,
        Err(_) => return DSSSP_ERR_INVALID_VERTEX_COUNT,
    };
    let mut session = match SsspSession::new(count) {
        Ok(session) => session,
        Err(err) => return status(&err),
    };

    if edge_count > 0 {
        let from = unsafe { std::slice::from_raw_parts(edges_from, edge_count) };
        let to = unsafe { std::slice::from_raw_parts(edges_to, edge_count) };
        let weights = unsafe { std::slice::from_raw_parts(edge_weights, edge_count) };
        for i in 0..edge_count {
            let (u, v) = match (vertex_index(from[i]), vertex_index(to[i])) {
                (Some(u), Some(v)) => (u, v),
                _ => return DSSSP_ERR_VERTEX_OUT_OF_RANGE,
            };
            let inserted = if undirected {
                session.add_edge_undirected(u, v, weights[i])
            } else {
                session.add_edge(u, v, weights[i])
            };
            if let Err(err) = inserted {
                return status(&err);
            }
        }
    }

    let source = match vertex_index(source) {
        Some(source) => source,
        None => return DSSSP_ERR_INVALID_SOURCE,
    };
    if let Err(err) = session.compute(source) {
        return status(&err);
    }
    let result = match session.result() {
        Some(result) => result,
        None => return DSSSP_ERR_NO_COMPUTATION,
    };

    let out = unsafe { std::slice::from_raw_parts_mut(out_distances, count) };
    for (slot, distance) in out.iter_mut().zip(result.distances.iter().copied()) {
        *slot = distance.unwrap_or(DSSSP_UNREACHABLE);
    }
    if !out_predecessors.is_null() {
        let out = unsafe { std::slice::from_raw_parts_mut(out_predecessors, count) };
        for (slot, predecessor) in out.iter_mut().zip(result.predecessors.iter().copied()) {
            *slot = predecessor.map_or(DSSSP_UNREACHABLE, |vertex| vertex as i64);
        }
    }
    DSSSP_OK
}
