pub mod text_evaluation_view;
