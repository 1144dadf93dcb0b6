pub use tw_core::gateways::email::EmailGateway;

mod send_to_json_file;
mod send_to_log;

pub use self::{send_to_json_file::SendToJsonFile, send_to_log::SendToLog};
