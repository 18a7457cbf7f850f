//! The canonical disease table.
//!
//! Array order matches the model's output layer; do not reorder entries
//! without retraining or re-exporting the model.

use super::DiseaseEntry;

/// All disease categories the model can predict, in model output order.
pub static DISEASES: [DiseaseEntry; 31] = [
    DiseaseEntry {
        label: "Basal Cell Carcinoma",
        description: "1. Basal Cell Carcinoma is a common skin cancer often linked to sun exposure.\n\
            2. It typically appears as a pearly or translucent bump.\n\
            3. Topical treatments like imiquimod or 5-fluorouracil are commonly recommended.\n\
            4. In advanced cases, surgical excision or Mohs micrographic surgery may be indicated.\n\
            5. A confirmatory skin biopsy is critical to establish the diagnosis.\n\
            6. Imaging tests (e.g., ultrasound) can help assess the lesion's depth.\n\
            7. Blood tests may be done to ensure overall health before surgery.\n\
            8. Regular dermatological examinations are important for monitoring.\n\
            9. Patients are advised to adopt rigorous sun protection measures.\n\
            10. A multidisciplinary evaluation, including laboratory tests, ensures comprehensive care.",
        lab_tests: "- **Skin Biopsy:** For histopathological confirmation\n\
            - **Ultrasound Imaging:** To assess lesion depth\n\
            - **Complete Blood Count (CBC):** To evaluate overall health\n\
            - **Inflammatory Markers:** (CRP, ESR)",
    },
    DiseaseEntry {
        label: "Darier_s Disease",
        description: "1. Darier's Disease is a genetic disorder marked by greasy, scaly skin lesions.\n\
            2. It commonly affects seborrheic areas like the chest and back.\n\
            3. Topical retinoids and corticosteroids help reduce inflammation.\n\
            4. Oral retinoids are sometimes considered for more severe cases.\n\
            5. A thorough skin examination and family history are essential for diagnosis.\n\
            6. A skin biopsy can confirm the typical histopathological features.\n\
            7. Blood tests, including liver function tests, may be performed prior to systemic therapy.\n\
            8. Photoprotection and regular moisturization help manage symptoms.\n\
            9. Consistent follow-up with a dermatologist is advised.\n\
            10. Comprehensive laboratory workup assists in ruling out additional systemic involvement.",
        lab_tests: "- **Skin Biopsy:** For diagnostic confirmation\n\
            - **Liver Function Tests:** Especially if considering systemic retinoids\n\
            - **Complete Blood Count (CBC):** To monitor overall health\n\
            - **Autoimmune Panel:** If indicated by clinical history",
    },
    DiseaseEntry {
        label: "Epidermolysis Bullosa Pruriginosa",
        description: "1. This rare genetic condition leads to itchy and blistering skin lesions.\n\
            2. Patients experience chronic, painful lesions that may scar over time.\n\
            3. Topical anesthetics and soothing creams help manage pain.\n\
            4. Strict wound care and infection prevention measures are essential.\n\
            5. A skin biopsy is crucial for confirming the diagnosis.\n\
            6. Inflammatory markers and microbial cultures can help identify secondary infections.\n\
            7. Maintaining skin moisture with barrier creams is advised.\n\
            8. Avoiding trauma to the skin may reduce new lesion formation.\n\
            9. Phototherapy may be an option under specialist supervision.\n\
            10. Continuous monitoring and supportive care are vital for optimal management.",
        lab_tests: "- **Skin Biopsy:** For definitive diagnosis\n\
            - **Inflammatory Marker Tests:** (CRP, ESR) to check for secondary infections\n\
            - **Microbial Cultures:** To rule out superinfections",
    },
    DiseaseEntry {
        label: "Hailey-Hailey Disease",
        description: "1. Hailey-Hailey Disease is an inherited condition characterized by recurrent blisters in skin folds.\n\
            2. It often affects areas subject to friction such as the armpits and groin.\n\
            3. Topical steroids and antibiotics reduce inflammation and prevent secondary infections.\n\
            4. Systemic immunomodulators may be prescribed in severe cases.\n\
            5. A thorough clinical examination and patient history are critical for diagnosis.\n\
            6. Skin biopsy helps confirm the typical acantholytic features.\n\
            7. Basic blood tests (CBC, inflammatory markers) can be useful for monitoring.\n\
            8. Maintaining proper skin hygiene and reducing friction are key.\n\
            9. Warm compresses and soothing baths may alleviate discomfort.\n\
            10. Regular follow-up ensures treatment adjustments based on lab results and clinical progress.",
        lab_tests: "- **Skin Biopsy:** To identify characteristic histopathology\n\
            - **Complete Blood Count (CBC):** Routine health check\n\
            - **Inflammatory Markers:** To assess systemic inflammation",
    },
    DiseaseEntry {
        label: "Herpes Simplex",
        description: "1. Herpes Simplex is a viral infection producing painful, recurrent lesions.\n\
            2. It typically appears as clusters of blisters near the lips or genital area.\n\
            3. Antiviral medications such as acyclovir help reduce outbreak severity.\n\
            4. Topical antiviral creams provide localized relief.\n\
            5. A detailed clinical examination is fundamental for diagnosis.\n\
            6. Laboratory tests including PCR and viral cultures confirm the viral presence.\n\
            7. Blood tests can help assess the patient's immune status.\n\
            8. Maintaining good hygiene helps prevent spread.\n\
            9. Stress management and a healthy lifestyle may reduce recurrences.\n\
            10. Regular follow-ups with a skin specialist ensure proper management and lab monitoring.",
        lab_tests: "- **PCR Testing:** For viral DNA detection\n\
            - **Viral Culture:** To confirm active infection\n\
            - **Complete Blood Count (CBC):** To evaluate immune status",
    },
    DiseaseEntry {
        label: "Impetigo",
        description: "1. Impetigo is a highly contagious bacterial skin infection with red sores forming yellow crusts.\n\
            2. It is most common in young children.\n\
            3. Topical antibiotics like mupirocin are typically effective.\n\
            4. Extensive cases may require oral antibiotics.\n\
            5. A clinical examination is generally sufficient for diagnosis.\n\
            6. Bacterial cultures can identify the causative organism if needed.\n\
            7. Basic blood tests are performed if systemic involvement is suspected.\n\
            8. Maintaining strict hygiene is essential to prevent spread.\n\
            9. Environmental decontamination is recommended to avoid reinfection.\n\
            10. Regular follow-up ensures laboratory parameters remain within normal limits during treatment.",
        lab_tests: "- **Bacterial Culture:** To identify causative organisms\n\
            - **Complete Blood Count (CBC):** If systemic infection is suspected",
    },
    DiseaseEntry {
        label: "Larva Migrans",
        description: "1. Larva Migrans is caused by parasitic larvae migrating under the skin, producing an itchy, winding rash.\n\
            2. It is commonly seen in tropical or subtropical regions.\n\
            3. Antiparasitic medications like ivermectin are the treatment of choice.\n\
            4. Topical anti-itch creams provide symptomatic relief.\n\
            5. A clinical evaluation based on lesion appearance and history is typically sufficient.\n\
            6. Skin scrapings with KOH preparation may help confirm the diagnosis.\n\
            7. A blood test to check for eosinophilia can be supportive.\n\
            8. Preventive measures such as proper footwear are advised.\n\
            9. Maintaining good personal hygiene helps prevent recurrence.\n\
            10. Regular follow-up and laboratory workup help assess treatment response.",
        lab_tests: "- **Skin Scrapings/KOH Prep:** To identify parasitic elements\n\
            - **Eosinophil Count:** As an indicator of parasitic infection",
    },
    DiseaseEntry {
        label: "Leprosy Borderline",
        description: "1. Leprosy Borderline is caused by Mycobacterium leprae and presents with discolored or numb skin lesions.\n\
            2. It lies between the tuberculoid and lepromatous forms in severity.\n\
            3. Multidrug therapy (including dapsone and rifampicin) is the standard treatment.\n\
            4. Topical treatments may alleviate localized symptoms.\n\
            5. A skin biopsy along with slit-skin smears is key for diagnosis.\n\
            6. Nerve conduction studies assess the extent of nerve involvement.\n\
            7. PCR and bacterial index tests help in identifying Mycobacterium leprae.\n\
            8. CBC and inflammatory markers are monitored during treatment.\n\
            9. Early intervention prevents permanent nerve damage.\n\
            10. Regular dermatological and neurological evaluations ensure comprehensive care.",
        lab_tests: "- **Slit-Skin Smear:** For acid-fast bacilli detection\n\
            - **Skin Biopsy:** With histopathological examination\n\
            - **PCR Testing:** For Mycobacterium leprae\n\
            - **Nerve Conduction Studies:** To assess nerve involvement",
    },
    DiseaseEntry {
        label: "Leprosy Lepromatous",
        description: "1. Leprosy Lepromatous is a severe form with widespread skin lesions due to a weak immune response.\n\
            2. It requires a multidrug regimen for effective treatment.\n\
            3. Topical agents can help relieve local symptoms.\n\
            4. Skin biopsy and slit-skin smears are critical for diagnosis.\n\
            5. Detailed PCR tests quantify the bacterial load.\n\
            6. Nerve conduction studies evaluate neurological involvement.\n\
            7. Regular blood tests monitor treatment response.\n\
            8. Patient education and counseling are important during therapy.\n\
            9. A multidisciplinary approach ensures optimal patient care.\n\
            10. Laboratory tests combined with clinical follow-up track disease progression.",
        lab_tests: "- **Slit-Skin Smear:** For bacterial load estimation\n\
            - **Skin Biopsy:** To confirm diagnosis\n\
            - **PCR Testing:** For Mycobacterium leprae identification\n\
            - **Complete Blood Count (CBC):** For monitoring",
    },
    DiseaseEntry {
        label: "Leprosy Tuberculoid",
        description: "1. Leprosy Tuberculoid presents with well-defined hypopigmented lesions and sensory loss.\n\
            2. It is characterized by a strong immune response to Mycobacterium leprae.\n\
            3. Treatment involves multidrug therapy including dapsone and rifampicin.\n\
            4. Topical steroids may reduce localized inflammation.\n\
            5. A skin biopsy confirms the diagnosis.\n\
            6. Slit-skin smears and nerve conduction studies are recommended.\n\
            7. Sensory testing further supports the diagnosis.\n\
            8. Regular blood tests help monitor treatment efficacy.\n\
            9. Patient education on preventing trauma to affected areas is crucial.\n\
            10. Consistent follow-up by a skin specialist ensures early detection of complications.",
        lab_tests: "- **Skin Biopsy:** For histopathological analysis\n\
            - **Slit-Skin Smear:** For bacterial detection\n\
            - **Nerve Conduction Studies:** To evaluate sensory deficits\n\
            - **Sensory Testing:** As part of neurological assessment",
    },
    DiseaseEntry {
        label: "Lichen Planus",
        description: "1. Lichen Planus is an inflammatory condition marked by purple, pruritic, polygonal papules.\n\
            2. It can affect both the skin and mucous membranes.\n\
            3. Topical corticosteroids are usually the first line of treatment.\n\
            4. Oral antihistamines help control itching.\n\
            5. A skin biopsy confirms the diagnosis.\n\
            6. Blood tests, including liver function tests and autoimmune panels, may be indicated.\n\
            7. Phototherapy is a treatment option for widespread lesions.\n\
            8. Avoidance of known triggers helps reduce flare-ups.\n\
            9. Regular dermatologist visits assist in monitoring progression.\n\
            10. Comprehensive laboratory evaluations ensure no systemic involvement is overlooked.",
        lab_tests: "- **Skin Biopsy:** For definitive diagnosis\n\
            - **Liver Function Tests:** To rule out drug-induced causes\n\
            - **Autoimmune Panel:** For associated autoimmune conditions",
    },
    DiseaseEntry {
        label: "Lupus Erythematosus Chronicus Discoides",
        description: "1. Lupus Erythematosus Chronicus Discoides presents with chronic discoid lesions that may scar.\n\
            2. It is a form of cutaneous lupus with limited systemic involvement.\n\
            3. Topical corticosteroids and calcineurin inhibitors are used for skin lesions.\n\
            4. Oral antimalarials such as hydroxychloroquine may be prescribed.\n\
            5. A skin biopsy differentiates it from other dermatoses.\n\
            6. Laboratory tests including ANA, anti-dsDNA, and complement levels are recommended.\n\
            7. Photoprotection is crucial to prevent lesion exacerbation.\n\
            8. CBC and metabolic panels are monitored during treatment.\n\
            9. Detailed immunological studies help tailor therapy.\n\
            10. Regular follow-up with laboratory tests ensures optimal long-term management.",
        lab_tests: "- **ANA and Anti-dsDNA:** For autoimmune screening\n\
            - **Complement Levels:** (C3, C4)\n\
            - **Skin Biopsy:** For histopathological confirmation",
    },
    DiseaseEntry {
        label: "Melanoma",
        description: "1. Melanoma is an aggressive skin cancer arising from melanocytes.\n\
            2. It usually presents as an irregular, asymmetrical pigmented lesion.\n\
            3. Early detection through self-examination is crucial.\n\
            4. Surgical excision with clear margins is the primary treatment.\n\
            5. A skin biopsy with histopathology confirms the diagnosis.\n\
            6. Sentinel lymph node biopsy is recommended to assess metastasis.\n\
            7. Blood tests such as LDH may help in monitoring advanced cases.\n\
            8. Imaging studies (CT/MRI) assist in staging the disease.\n\
            9. Patient education on sun protection and skin surveillance is vital.\n\
            10. Regular multidisciplinary follow-up, including lab tests, is essential for management.",
        lab_tests: "- **Skin Biopsy:** With histopathological evaluation\n\
            - **Sentinel Lymph Node Biopsy:** For staging\n\
            - **LDH Levels:** For advanced disease monitoring\n\
            - **Complete Blood Count (CBC):** Routine evaluation",
    },
    DiseaseEntry {
        label: "Molluscum Contagiosum",
        description: "1. Molluscum Contagiosum is a viral infection characterized by small, dome-shaped papules.\n\
            2. It is common in children and immunocompromised individuals.\n\
            3. Cryotherapy and topical agents such as imiquimod are common treatments.\n\
            4. Physical removal (e.g., curettage) is often effective.\n\
            5. Clinical evaluation is usually sufficient for diagnosis.\n\
            6. Laboratory tests are rarely needed unless there is suspicion of an immune deficiency.\n\
            7. In recurrent cases, immune status evaluation may be considered.\n\
            8. Good hygiene helps limit spread.\n\
            9. Follow-up ensures lesions resolve without complications.\n\
            10. Periodic evaluation by a skin specialist confirms diagnosis and guides management.",
        lab_tests: "- **Clinical Evaluation:** Primary diagnostic tool\n\
            - **Immune Status Assessment:** (if recurrent cases occur)",
    },
    DiseaseEntry {
        label: "Mycosis Fungoides",
        description: "1. Mycosis Fungoides is a type of cutaneous T-cell lymphoma presenting as patches and plaques.\n\
            2. It often follows an indolent but progressive course.\n\
            3. Topical corticosteroids and phototherapy are common first-line treatments.\n\
            4. Systemic therapies may be introduced in advanced stages.\n\
            5. A skin biopsy with immunohistochemistry is essential for diagnosis.\n\
            6. Flow cytometry and molecular studies determine T-cell clonality.\n\
            7. Regular blood tests and LDH measurements help monitor disease activity.\n\
            8. Imaging studies are used for accurate disease staging.\n\
            9. Patient education on the chronic nature of the condition is important.\n\
            10. Multidisciplinary follow-up, including periodic lab tests, is recommended.",
        lab_tests: "- **Skin Biopsy with Immunohistochemistry:** For diagnostic confirmation\n\
            - **Flow Cytometry:** To assess T-cell clonality\n\
            - **LDH Levels and CBC:** For monitoring disease activity",
    },
    DiseaseEntry {
        label: "Neurofibromatosis",
        description: "1. Neurofibromatosis is a genetic disorder that causes benign nerve sheath tumors.\n\
            2. It commonly presents with multiple neurofibromas on the skin.\n\
            3. Surgical removal may be considered for symptomatic lesions.\n\
            4. Topical treatments can help manage localized discomfort.\n\
            5. Genetic testing is recommended to confirm the diagnosis.\n\
            6. MRI or CT scans assess deeper or plexiform neurofibromas.\n\
            7. Regular neurological examinations and skin checks are critical.\n\
            8. Routine blood panels help monitor overall health.\n\
            9. Counseling and genetic advice support patient management.\n\
            10. Continuous follow-up with specialists, along with lab tests, ensures early detection of complications.",
        lab_tests: "- **Genetic Testing:** To confirm diagnosis\n\
            - **MRI/CT Scans:** For assessing plexiform neurofibromas\n\
            - **Complete Blood Count (CBC):** Routine monitoring",
    },
    DiseaseEntry {
        label: "Papilomatosis Confluentes And Reticulate",
        description: "1. This rare condition presents with confluent papules in a reticulate pattern.\n\
            2. It predominantly affects flexural areas with cosmetic concerns.\n\
            3. Topical retinoids and corticosteroids may improve skin appearance.\n\
            4. Oral retinoids are an option for widespread involvement.\n\
            5. A skin biopsy confirms the diagnosis.\n\
            6. Basic blood tests (CBC, liver panel) help monitor systemic effects.\n\
            7. Regular dermatological evaluations are advised.\n\
            8. Imaging studies are rarely required unless deeper involvement is suspected.\n\
            9. Patient education regarding treatment adherence is critical.\n\
            10. Periodic laboratory tests ensure that therapy remains safe and effective.",
        lab_tests: "- **Skin Biopsy:** For definitive diagnosis\n\
            - **Complete Blood Count (CBC):** Routine evaluation\n\
            - **Liver Function Tests:** If systemic therapy is considered",
    },
    DiseaseEntry {
        label: "Pediculosis Capitis",
        description: "1. Pediculosis Capitis (head lice infestation) is marked by intense scalp itching.\n\
            2. It is most common in school-aged children.\n\
            3. Over-the-counter pediculicides such as permethrin are effective.\n\
            4. Manual removal using a fine-toothed comb supports treatment.\n\
            5. A clinical examination confirms the diagnosis.\n\
            6. Laboratory tests are rarely required for head lice.\n\
            7. Regular scalp inspections help prevent reinfestation.\n\
            8. Proper hygiene and environmental cleaning are essential.\n\
            9. Alternative medications may be considered in resistant cases.\n\
            10. Follow-up by a healthcare provider ensures complete eradication.",
        lab_tests: "- **Clinical Examination:** Primary diagnosis\n\
            - *No specific laboratory tests are typically required*",
    },
    DiseaseEntry {
        label: "Pityriasis Rosea",
        description: "1. Pityriasis Rosea is a self-limiting rash often preceded by a herald patch.\n\
            2. It manifests as widespread, oval pink patches.\n\
            3. Topical corticosteroids help alleviate itching.\n\
            4. Oral antihistamines can be used for symptomatic relief.\n\
            5. A clinical examination is generally sufficient for diagnosis.\n\
            6. Basic blood tests like CBC help rule out other conditions.\n\
            7. Skin scrapings may be performed if the presentation is atypical.\n\
            8. Proper skin care and hydration are advised.\n\
            9. Patient education reassures that the condition is self-limiting.\n\
            10. Regular follow-up confirms resolution and monitors labs if needed.",
        lab_tests: "- **Complete Blood Count (CBC):** To exclude other conditions\n\
            - **Basic Metabolic Panel:** As part of routine evaluation",
    },
    DiseaseEntry {
        label: "Porokeratosis Actinic",
        description: "1. Porokeratosis Actinic presents as annular lesions with raised borders on sun-exposed skin.\n\
            2. It is considered a precancerous condition.\n\
            3. Topical treatments such as 5-fluorouracil or imiquimod are used.\n\
            4. Cryotherapy may be applied for localized lesions.\n\
            5. A skin biopsy is essential for definitive diagnosis.\n\
            6. Dermoscopy aids in evaluating early malignant changes.\n\
            7. Laboratory tests are minimal unless atypical features appear.\n\
            8. Strict sun protection is strongly recommended.\n\
            9. Regular dermatologic assessments monitor lesion changes.\n\
            10. Follow-up with lab tests helps ensure no malignant transformation occurs.",
        lab_tests: "- **Skin Biopsy:** If lesions appear atypical\n\
            - **Dermoscopy:** To evaluate lesion characteristics\n\
            - **Complete Blood Count (CBC):** Routine test if indicated",
    },
    DiseaseEntry {
        label: "Psoriasis",
        description: "1. Psoriasis is a chronic autoimmune condition characterized by red, scaly plaques.\n\
            2. It commonly affects the scalp, elbows, and knees.\n\
            3. Topical corticosteroids and vitamin D analogs are first-line treatments.\n\
            4. Systemic agents or biologics may be used for moderate-to-severe cases.\n\
            5. A detailed clinical examination and history are critical for diagnosis.\n\
            6. Blood tests (CBC, CRP/ESR) help monitor disease activity.\n\
            7. A skin biopsy may be considered in atypical presentations.\n\
            8. Phototherapy is an effective treatment option.\n\
            9. Patient education on triggers and lifestyle modifications is vital.\n\
            10. Regular follow-up with laboratory evaluations ensures optimal long-term management.",
        lab_tests: "- **Complete Blood Count (CBC):** For routine health monitoring\n\
            - **CRP/ESR:** To assess inflammatory status\n\
            - **Liver Function Tests:** If systemic treatments are used",
    },
    DiseaseEntry {
        label: "Tinea Corporis",
        description: "1. Tinea Corporis (ringworm) is a fungal infection presenting as ring-shaped, scaly lesions.\n\
            2. It is typically diagnosed through clinical examination.\n\
            3. Topical antifungals like clotrimazole are usually effective.\n\
            4. Oral antifungals may be required for extensive or resistant cases.\n\
            5. Skin scrapings with KOH preparation help confirm the diagnosis.\n\
            6. Fungal cultures can further support the findings.\n\
            7. Basic blood tests are generally not required unless systemic infection is suspected.\n\
            8. Maintaining good hygiene is essential to prevent spread.\n\
            9. Patient education on cleaning personal items is advised.\n\
            10. Follow-up examinations ensure complete resolution and monitor labs if needed.",
        lab_tests: "- **KOH Preparation:** For fungal elements detection\n\
            - **Fungal Culture:** To confirm the pathogen\n\
            - *CBC is rarely required unless systemic involvement is suspected*",
    },
    DiseaseEntry {
        label: "Tinea Nigra",
        description: "1. Tinea Nigra is a superficial fungal infection causing dark, velvety patches, usually on the palms or soles.\n\
            2. It is generally benign and asymptomatic.\n\
            3. Topical antifungal agents are the treatment of choice.\n\
            4. A clinical diagnosis is supported by KOH preparation of skin scrapings.\n\
            5. Fungal culture may be performed for confirmation.\n\
            6. Laboratory tests are minimal unless secondary infection is suspected.\n\
            7. Proper skin hygiene is essential.\n\
            8. Differential diagnosis with pigmented lesions is important.\n\
            9. Regular follow-up confirms proper treatment response.\n\
            10. A skin specialist may perform additional lab tests if the presentation is atypical.",
        lab_tests: "- **KOH Preparation:** For confirming fungal elements\n\
            - **Fungal Culture:** If clinical diagnosis is uncertain",
    },
    DiseaseEntry {
        label: "Tungiasis",
        description: "1. Tungiasis is caused by the sand flea penetrating the skin, most commonly on the feet.\n\
            2. It presents with painful, itchy lesions in tropical regions.\n\
            3. The primary treatment involves careful removal of the embedded flea.\n\
            4. Topical antiseptics and antibiotics prevent secondary infections.\n\
            5. A clinical examination confirms the diagnosis.\n\
            6. Laboratory tests are rarely needed unless systemic infection is suspected.\n\
            7. Imaging studies are generally unnecessary.\n\
            8. Proper foot hygiene and protective footwear are advised.\n\
            9. Routine blood tests may be done if systemic symptoms develop.\n\
            10. Follow-up with a skin specialist ensures complete recovery and treatment safety.",
        lab_tests: "- **Clinical Examination:** Primary diagnosis\n\
            - **Complete Blood Count (CBC):** If secondary infection is suspected",
    },
    DiseaseEntry {
        label: "actinic keratosis",
        description: "1. Actinic Keratosis is a precancerous skin condition from chronic sun exposure.\n\
            2. It appears as rough, scaly patches on sun-exposed areas.\n\
            3. Topical treatments like 5-fluorouracil or imiquimod are used.\n\
            4. Cryotherapy is effective for isolated lesions.\n\
            5. A skin biopsy is warranted if the lesion appears suspicious.\n\
            6. Dermoscopy assists in early detection of malignant changes.\n\
            7. Basic blood tests are generally normal unless otherwise indicated.\n\
            8. Strict sun protection is essential.\n\
            9. Imaging studies may be recommended in uncertain cases.\n\
            10. Regular follow-up with lab tests ensures early detection of progression.",
        lab_tests: "- **Skin Biopsy:** For lesions with suspicious features\n\
            - **Dermoscopy:** To monitor lesion changes\n\
            - *CBC is typically normal unless complications arise*",
    },
    DiseaseEntry {
        label: "dermatofibroma",
        description: "1. Dermatofibroma is a benign fibrous nodule often found on the legs.\n\
            2. It is usually asymptomatic but may cause mild discomfort.\n\
            3. Observation is typically recommended for stable lesions.\n\
            4. Surgical excision is an option if symptoms worsen.\n\
            5. A skin biopsy confirms the diagnosis when in doubt.\n\
            6. Dermoscopy supports differentiation from malignant lesions.\n\
            7. Laboratory tests are generally not required.\n\
            8. Patient reassurance and education are important.\n\
            9. Regular follow-up helps monitor any changes.\n\
            10. A thorough clinical examination ensures no further intervention is needed.",
        lab_tests: "- **Skin Biopsy:** If diagnostic uncertainty exists\n\
            - **Dermoscopy:** For lesion evaluation",
    },
    DiseaseEntry {
        label: "nevus",
        description: "1. A nevus (mole) is a benign collection of melanocytes.\n\
            2. It typically appears as a uniform pigmented spot.\n\
            3. Observation is recommended if the nevus remains stable.\n\
            4. Surgical removal is considered if significant changes occur.\n\
            5. A skin biopsy rules out melanoma if suspicious.\n\
            6. Dermoscopic evaluation supports an accurate diagnosis.\n\
            7. Laboratory tests are not typically needed.\n\
            8. Regular self-examinations and clinical checks are advised.\n\
            9. Patients should practice sun protection to prevent changes.\n\
            10. Follow-up visits with a dermatologist ensure early detection of malignancy.",
        lab_tests: "- **Dermoscopy:** To assess for atypical features\n\
            - **Skin Biopsy:** If there are significant changes",
    },
    DiseaseEntry {
        label: "pigmented benign keratosis",
        description: "1. Pigmented benign keratosis is a non-cancerous skin lesion with a rough texture.\n\
            2. Its pigmented appearance can mimic malignant lesions.\n\
            3. Topical treatments and cryotherapy may improve appearance.\n\
            4. A thorough clinical examination is necessary.\n\
            5. A skin biopsy can be done if the lesion appears atypical.\n\
            6. Histopathology confirms its benign nature.\n\
            7. Regular dermoscopic monitoring is advised.\n\
            8. Patients are counseled on sun protection.\n\
            9. Laboratory tests help rule out malignancy.\n\
            10. Follow-up with a skin specialist ensures ongoing stability.",
        lab_tests: "- **Dermoscopy:** For routine evaluation\n\
            - **Skin Biopsy:** If the lesion shows atypical features",
    },
    DiseaseEntry {
        label: "seborrheic keratosis",
        description: "1. Seborrheic keratosis is a common benign growth appearing as a waxy, brown lesion.\n\
            2. It is non-cancerous despite its appearance.\n\
            3. Cryotherapy, curettage, or laser therapy can be used for removal.\n\
            4. A skin biopsy is considered if there is diagnostic uncertainty.\n\
            5. Clinical examination combined with dermoscopy supports the diagnosis.\n\
            6. Laboratory tests are rarely required.\n\
            7. Patients are advised to monitor for rapid changes.\n\
            8. Routine follow-up confirms lesion stability.\n\
            9. Patient education reassures the benign nature.\n\
            10. Detailed evaluation by a skin specialist confirms proper management.",
        lab_tests: "- **Clinical Evaluation:** Primary diagnostic tool\n\
            - **Dermoscopy:** To rule out malignancy\n\
            - **Skin Biopsy:** If the diagnosis is uncertain",
    },
    DiseaseEntry {
        label: "squamous cell carcinoma",
        description: "1. Squamous Cell Carcinoma arises from keratinocytes and is a common skin cancer.\n\
            2. It typically presents as a scaly, red nodule or lesion.\n\
            3. Surgical excision or Mohs micrographic surgery is the primary treatment.\n\
            4. Topical chemotherapeutic agents may be used for superficial lesions.\n\
            5. A skin biopsy is necessary for definitive diagnosis.\n\
            6. Imaging studies (CT/MRI) assess lesion extent and metastasis.\n\
            7. Blood tests including CBC and inflammatory markers are recommended.\n\
            8. Strict sun protection is critical.\n\
            9. Regular follow-up monitors for potential metastasis.\n\
            10. A comprehensive treatment plan includes periodic laboratory tests.",
        lab_tests: "- **Skin Biopsy:** For histopathological confirmation\n\
            - **CT/MRI Scans:** For staging\n\
            - **Complete Blood Count (CBC):** Routine evaluation\n\
            - **Inflammatory Markers:** (CRP, ESR)",
    },
    DiseaseEntry {
        label: "vascular lesion",
        description: "1. Vascular lesions include conditions such as hemangiomas and port-wine stains.\n\
            2. They present as red to purple discolorations of the skin.\n\
            3. Laser therapy and sclerotherapy are common treatment options.\n\
            4. Topical treatments may alleviate minor symptoms.\n\
            5. A clinical examination is typically sufficient for diagnosis.\n\
            6. Doppler ultrasound assesses blood flow within the lesion.\n\
            7. Coagulation profiles may be performed as part of lab evaluation.\n\
            8. Detailed patient history guides treatment planning.\n\
            9. Follow-up ensures treatment efficacy.\n\
            10. A multidisciplinary approach, including lab tests, is recommended for optimal management.",
        lab_tests: "- **Doppler Ultrasound:** To assess blood flow\n\
            - **Coagulation Profile:** As part of laboratory evaluation\n\
            - **Clinical Examination:** Primary diagnostic tool",
    },
];
