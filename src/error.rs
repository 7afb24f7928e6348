use derive_more::{Display, From};
use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;
use serde_yaml::Error as SerdeYamlError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

// NOTE:
// - Error must implement Debug to be used as E in fn main() -> Result<(), E>
// - Error must implement Display for Any::error() and for Searcher::finish(), which surfaces the
//   message of a failed search as the status text
#[derive(Debug, Display, From)]
pub enum Error {
    Io(IoError),
    Reqwest(ReqwestError),
    SerdeJson(SerdeJsonError),
    SerdeYaml(SerdeYamlError),
    UrlParse(UrlParseError),

    #[display(fmt = "Unable to fetch results")]
    UnableToFetch,
}
