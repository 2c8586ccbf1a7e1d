pub mod answer_dto;
pub mod question_dto;
