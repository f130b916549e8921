use crate::error::{Result, SenderError};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// 연락처 컬럼의 비어있지 않은 셀 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContact {
    /// 스프레드시트 기준 1부터 시작하는 행 번호
    pub row: usize,
    pub value: String,
}

/// 워크북에서 연락처 컬럼을 읽어옵니다.
pub struct SheetLoader {
    column: String,
    sheet: Option<String>,
}

impl SheetLoader {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            sheet: None,
        }
    }

    /// 특정 워크시트 지정 (기본: 첫 번째 시트)
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn load(&self, path: &Path) -> Result<Vec<RawContact>> {
        if !path.is_file() {
            return Err(SenderError::MissingSpreadsheet(path.display().to_string()));
        }

        let mut workbook = open_workbook_auto(path)
            .map_err(|e| SenderError::Spreadsheet(e.to_string()))?;

        let range = match &self.sheet {
            Some(name) => workbook
                .worksheet_range(name)
                .map_err(|e| SenderError::Spreadsheet(format!("sheet '{}': {}", name, e)))?,
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| SenderError::Spreadsheet("workbook has no worksheets".to_string()))?
                .map_err(|e| SenderError::Spreadsheet(e.to_string()))?,
        };

        self.extract(&range)
    }

    /// 헤더 행에서 컬럼을 찾아 값들을 행 순서대로 추출
    pub fn extract(&self, range: &Range<Data>) -> Result<Vec<RawContact>> {
        let mut rows = range.rows();
        let header = rows
            .next()
            .ok_or_else(|| SenderError::MissingColumn(self.column.clone()))?;

        let column_idx = header
            .iter()
            .position(|cell| cell_to_string(cell).trim() == self.column)
            .ok_or_else(|| SenderError::MissingColumn(self.column.clone()))?;

        let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);

        let contacts = rows
            .enumerate()
            .filter_map(|(idx, row)| {
                let value = row.get(column_idx).map(cell_to_string)?;
                if value.trim().is_empty() {
                    return None;
                }
                Some(RawContact {
                    // 헤더 다음 행부터, 1-based
                    row: first_row + idx + 2,
                    value,
                })
            })
            .collect();

        Ok(contacts)
    }
}

/// 셀 값을 문자열로 변환
///
/// 소수부가 없는 실수는 정수로 표시합니다 (9876543210.0 → "9876543210").
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    /// 테스트 워크북에 쓸 셀
    pub enum BookCell<'a> {
        Text(&'a str),
        Number(f64),
        Blank,
    }

    /// 첫 번째 시트의 A열에 헤더와 값들을 써서 .xlsx 저장
    pub fn write_book(path: &Path, header: &str, cells: &[BookCell<'_>]) {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, header).unwrap();
        for (idx, cell) in cells.iter().enumerate() {
            let row = idx as u32 + 1;
            match cell {
                BookCell::Text(v) => {
                    worksheet.write_string(row, 0, *v).unwrap();
                }
                BookCell::Number(n) => {
                    worksheet.write_number(row, 0, *n).unwrap();
                }
                BookCell::Blank => {}
            }
        }
        workbook.save(path).unwrap();
    }

    fn sheet(rows: &[&[Data]]) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(1) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), cell.clone());
            }
        }
        range
    }

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    #[test]
    fn test_extracts_column_in_row_order() {
        let range = sheet(&[
            &[s("Name"), s("WhatsApp")],
            &[s("A"), s("9876543210")],
            &[s("B"), s("+1234567891")],
            &[s("C"), Data::Empty],
            &[s("D"), s("abc")],
        ]);

        let contacts = SheetLoader::new("WhatsApp").extract(&range).unwrap();
        let values: Vec<&str> = contacts.iter().map(|c| c.value.as_str()).collect();

        assert_eq!(values, vec!["9876543210", "+1234567891", "abc"]);
        assert_eq!(contacts[0].row, 2);
        assert_eq!(contacts[2].row, 5);
    }

    #[test]
    fn test_missing_column() {
        let range = sheet(&[&[s("Name"), s("Phone")], &[s("A"), s("123")]]);

        let result = SheetLoader::new("WhatsApp").extract(&range);
        assert!(matches!(result, Err(SenderError::MissingColumn(c)) if c == "WhatsApp"));
    }

    #[test]
    fn test_column_name_is_case_sensitive() {
        let range = sheet(&[&[s("whatsapp")], &[s("9876543210")]]);
        assert!(SheetLoader::new("WhatsApp").extract(&range).is_err());
    }

    #[test]
    fn test_header_whitespace_is_ignored() {
        let range = sheet(&[&[s("Name"), s(" WhatsApp ")], &[s("A"), s("9876543210")]]);

        let contacts = SheetLoader::new("WhatsApp").extract(&range).unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].value, "9876543210");

        // 공백만 무시하고 대소문자는 그대로 비교
        let range = sheet(&[&[s("whatsapp ")], &[s("9876543210")]]);
        assert!(matches!(
            SheetLoader::new("WhatsApp").extract(&range),
            Err(SenderError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_numeric_cells_render_as_integers() {
        let range = sheet(&[
            &[s("WhatsApp")],
            &[Data::Float(9876543210.0)],
            &[Data::Int(919812345678)],
            &[s("   ")],
        ]);

        let contacts = SheetLoader::new("WhatsApp").extract(&range).unwrap();
        let values: Vec<&str> = contacts.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["9876543210", "919812345678"]);
    }

    #[test]
    fn test_cell_to_string_fractional_float() {
        assert_eq!(cell_to_string(&Data::Float(12.5)), "12.5");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_missing_file() {
        let result = SheetLoader::new("WhatsApp").load(Path::new("/nonexistent/contacts.xlsx"));
        assert!(matches!(result, Err(SenderError::MissingSpreadsheet(_))));
    }

    #[test]
    fn test_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.xlsx");
        std::fs::write(&path, b"definitely not a zip archive").unwrap();

        let result = SheetLoader::new("WhatsApp").load(&path);
        assert!(matches!(result, Err(SenderError::Spreadsheet(_))));
    }

    #[test]
    fn test_load_xlsx_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.xlsx");
        write_book(
            &path,
            "WhatsApp",
            &[
                BookCell::Text("9876543210"),
                BookCell::Text("+1234567891"),
                BookCell::Blank,
                BookCell::Text("abc"),
                BookCell::Number(9876543211.0),
            ],
        );

        let contacts = SheetLoader::new("WhatsApp").load(&path).unwrap();
        let rows: Vec<(usize, &str)> = contacts.iter().map(|c| (c.row, c.value.as_str())).collect();
        assert_eq!(
            rows,
            vec![(2, "9876543210"), (3, "+1234567891"), (5, "abc"), (6, "9876543211")]
        );
    }
}
