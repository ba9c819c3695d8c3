// Library root
// ------------
// The binary (`main.rs`) only wires these together; everything it does is
// reachable from here so the upload flow can be tested without a process.
//
// Module responsibilities:
// - `config`: fixed endpoint/input defaults and their env overrides.
// - `users`: loading the input file into untyped user records.
// - `api`: the blocking HTTP client that posts one record.
// - `upload`: the sequential upload loop and its per-record outcomes.
// - `ui`: spinner and the optional pause-on-error debug hook.
// - `logging`: stdout logger setup.
pub mod api;
pub mod config;
pub mod logging;
pub mod ui;
pub mod upload;
pub mod users;
