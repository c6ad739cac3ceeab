use crate::common::*;

#[doc = "Query parameters of `GET /update_data`; the framework coerces each one to an integer and rejects the request otherwise"]
#[derive(Debug, Clone, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct UpdateQuery {
    pub number1: i64,
    pub number2: i64,
    pub number3: i64,
}

impl UpdateQuery {
    #[doc = "The three counters in series order"]
    pub fn as_triple(&self) -> [i64; 3] {
        [self.number1, self.number2, self.number3]
    }
}
